use std::io::Write;

use harvest_driver::Progress;

/// Progress sink printing one dot per poll cycle while the target is busy.
#[derive(Debug, Default)]
pub struct DotProgress;

impl Progress for DotProgress {
    fn tick(&mut self) {
        print!(".");
        let _ = std::io::stdout().flush();
    }

    fn done(&mut self) {
        println!(" done");
    }
}
