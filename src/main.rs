//! Desktop pet binary entry point.

use mochi::Viewer;

fn main() {
    env_logger::init();

    if let Err(e) = Viewer::builder().build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
