fn main() {
    if let Err(err) = votter::run() {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}
