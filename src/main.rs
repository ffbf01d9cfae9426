fn main() {
    std::process::exit(pwcheck::cli::run());
}
