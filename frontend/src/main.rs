fn main() {
    gym_portal_frontend::start();
}
