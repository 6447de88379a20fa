fn main() {
    deploy_wizard::app::cli::run();
}
