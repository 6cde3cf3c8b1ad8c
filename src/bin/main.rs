fn main() {
  dcrauthor::main();
}
