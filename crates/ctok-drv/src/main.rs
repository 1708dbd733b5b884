fn main() {
    if let Err(e) = ctok_drv::run_from_env() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
