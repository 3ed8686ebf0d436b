fn main() {
    if let Err(err) = series_chart::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
