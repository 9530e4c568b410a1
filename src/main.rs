fn main() {
    skulens::app::cli::run();
}
