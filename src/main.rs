// This binary crate is intentionally minimal.
// All training-harness logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example blobs
fn main() {
    println!("quench: a gradient-descent training harness with early stopping.");
    println!("Run `cargo run --example blobs` to train a model on synthetic data.");
}
