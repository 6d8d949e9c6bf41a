/// Display version information
pub fn execute() {
    println!("daoscope {}", env!("CARGO_PKG_VERSION"));
    println!("DAO governance dashboard state, simulated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_execute() {
        // Version command should not panic
        execute();
    }
}
