fn main() {
    if let Err(err) = landcover_carbon::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
