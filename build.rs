fn main() {
    // Embeds the toolchain version reported by the console binary.
    build_data::set_RUSTC_VERSION();
}
