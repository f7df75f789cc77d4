fn main() {
    if let Err(e) = chaic_drv::main() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
