fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = fakeflow_core::runtime::run(&args) {
        eprintln!("[fakeflow-core] runtime failed: {error}");
        std::process::exit(1);
    }
}
