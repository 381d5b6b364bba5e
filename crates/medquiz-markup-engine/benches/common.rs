// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_explanation(size: usize) -> String {
    let base = "**Hyperkalemia** with *peaked T waves*: give ==calcium gluconate== first. \
[red]Avoid[/red] succinylcholine & <script>alert(1)</script> _stabilize_ the membrane.\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_plain_text(size: usize) -> String {
    "Plain explanation text without any markup at all. ".repeat(size)
}
