fn main() {
    if let Err(e) = billed_lib::run() {
        eprintln!("起動に失敗しました: {}", e.details());
        std::process::exit(1);
    }
}
