fn main() {
    png2carray_bin::main();
}
