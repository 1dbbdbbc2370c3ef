use std::process::ExitCode;

fn main() -> ExitCode {
    vowel_triangle_lib::run()
}
