// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(size: usize) -> String {
    let base = "According to my handbooks, **yes**.\n\nSteps:\n* run `make`\n- check the _output_\n+ retry <if> needed & log\n\n```sh\nmake test\n```\nThat's *all*.\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_marker_noise(size: usize) -> String {
    "a * b _ c ` d ** e __ f *g h_ i`\n".repeat(size)
}
