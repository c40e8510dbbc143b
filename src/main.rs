fn main() {
    if let Err(e) = jot::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
