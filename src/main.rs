// src/main.rs
use gridwalk::app::App;
use gridwalk::core::renderer::backend::SelectedRenderer;
use gridwalk::error;

fn main() -> error::Result<()> {
    env_logger::init();

    App::<SelectedRenderer>::run()
}
