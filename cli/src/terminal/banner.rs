use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
        _        _                 _
       | |_ _ __(_)_ __   ___ __ _| | ___
       | __| '__| | '_ \ / __/ _` | |/ __|
       | |_| |  | | |_) | (_| (_| | | (__
        \__|_|  |_| .__/ \___\__,_|_|\___|
                  |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_cyan().bold()));
}
