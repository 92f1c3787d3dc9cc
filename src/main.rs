fn main() {
    admin_dashboard::start();
}
