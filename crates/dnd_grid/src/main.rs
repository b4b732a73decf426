fn main() {
    dnd_grid::run();
}
