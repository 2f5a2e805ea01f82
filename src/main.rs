fn main() {
    bats_energy::run();
}
