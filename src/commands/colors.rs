use cliui::{Ui, token, tokens};

/// Print each named color, in its own color
pub fn run(ui: &mut Ui) {
    for &(name, color) in token::NAMED {
        ui.info(&tokens![color, name]);
    }
}
