use anyhow::Result;
use cliui::token::{BLUE, BOLD, GREEN, RED, RESET};
use cliui::{Table, Timer, Ui, tokens};
use std::thread;
use std::time::Duration;

/// Show off every message style, then ask for a fruit
pub fn run(ui: &mut Ui, delay: Duration) -> Result<()> {
    ui.info(&tokens!["OK", ui.check()]);
    let up = ui.symbol("👍", "+1");
    ui.info(&tokens!["I like it", BLUE, up]);
    ui.info_section(&tokens![BOLD, "cli-ui demo"]);

    Timer::time(ui, "Demo", |ui| styles(ui, delay));

    let table = Table::new(vec![
        vec![tokens!["apple"], tokens![GREEN, "ripe"], tokens![42]],
        vec![tokens!["banana"], tokens![RED, "green"], tokens![10]],
        vec![tokens!["orange"], tokens![GREEN, "ripe"], tokens![12]],
    ])
    .with_headers(vec![tokens![BOLD, "fruit"], tokens!["state"], tokens!["price"]]);
    ui.info_table(&table);

    let fruits = vec!["apple", "orange", "banana"];
    match ui.ask_choice(&tokens!["Choose a fruit"], fruits, |f| (*f).to_string())? {
        Some(fruit) => ui.info(&tokens!["You chose:", BOLD, fruit]),
        None => ui.info(&tokens!["You chose nothing"]),
    }
    Ok(())
}

fn styles(ui: &mut Ui, delay: Duration) {
    let pause = || thread::sleep(delay);

    ui.info_1(&tokens!["Important info"]);
    pause();
    ui.info_2(&tokens!["Secondary info"]);
    pause();
    ui.info(&tokens!["This is", RED, "red"]);
    pause();
    ui.info(&tokens!["this is", BOLD, "bold"]);
    pause();
    ui.debug(&tokens!["this is only shown with --verbose"]);

    let things = ["foo", "bar", "baz"];
    for (i, thing) in things.iter().enumerate() {
        ui.info_count(i, things.len(), &tokens![*thing]);
        pause();
    }

    for value in [5.0, 10.0, 20.0] {
        ui.info_progress("Done", value, 20.0);
        pause();
    }
    let check = ui.check();
    ui.info(&tokens!["\n", check, RESET, "all done"]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliui::{Capabilities, Config, MemoryOutput, ScriptedInput};

    fn demo_ui(answers: &[&str]) -> (Ui, MemoryOutput) {
        let out = MemoryOutput::new();
        let ui = Ui::new(Config::default())
            .with_capabilities(Capabilities::limited())
            .with_outputs(out.clone(), MemoryOutput::new())
            .with_input(ScriptedInput::new(answers.iter().copied()));
        (ui, out)
    }

    #[test]
    fn test_demo_runs() {
        let (mut ui, out) = demo_ui(&["2"]);
        run(&mut ui, Duration::ZERO).unwrap();

        let contents = out.contents();
        assert!(contents.starts_with("OK ok"));
        assert!(contents.contains("I like it +1\n"));
        assert!(contents.contains(":: Important info\n"));
        assert!(contents.contains("* (3/3) baz\n"));
        assert!(contents.contains("Demo took "));
        assert!(contents.contains("fruit    state      price"));
        assert!(contents.ends_with("You chose: banana\n"));
        assert!(!contents.contains('\x1b'));
    }

    #[test]
    fn test_demo_without_choice() {
        let (mut ui, out) = demo_ui(&[""]);
        run(&mut ui, Duration::ZERO).unwrap();
        assert!(out.contents().ends_with("You chose nothing\n"));
    }

    #[test]
    fn test_demo_propagates_read_errors() {
        let (mut ui, _) = demo_ui(&[]);
        assert!(run(&mut ui, Duration::ZERO).is_err());
    }
}
