fn main() {
    multiversx_sc_meta_lib::cli_main::<collective_governance::AbiProvider>();
}
