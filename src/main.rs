use connectfour::Game;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
    let mut game = Game::new();
    game.start();
}
