//! Headless mode for Hydro Freaks.
//!
//! A numbered text menu over plain stdin/stdout, for terminals without
//! raw mode and for scripted play. Each prompt reads one line; end of input
//! exits the game.

use hydro_core::{DrinkKind, EvolutionStore, MonsterType};
use std::io::{self, BufRead, Write};

use crate::view;

/// Line-oriented game loop over any reader and writer
pub struct Headless<'a, R, W> {
    store: &'a mut EvolutionStore,
    history_limit: usize,
    input: R,
    out: W,
}

/// What a prompt produced
enum Reply {
    Number(i64),
    NotANumber,
    Eof,
}

impl<'a, R: BufRead, W: Write> Headless<'a, R, W> {
    pub fn new(store: &'a mut EvolutionStore, history_limit: usize, input: R, out: W) -> Self {
        Self {
            store,
            history_limit,
            input,
            out,
        }
    }

    /// Run the main menu until the player exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_header()?;

            match self.prompt_number("\nSelect option: ")? {
                Reply::Eof | Reply::Number(0) => {
                    writeln!(self.out, "\nThanks for playing, stay hydrated!")?;
                    return Ok(());
                }
                Reply::Number(1) => self.add_drink_menu()?,
                Reply::Number(2) => self.show_collection()?,
                Reply::Number(3) => self.change_monster()?,
                Reply::Number(4) => self.show_history()?,
                Reply::Number(_) => writeln!(self.out, "\nInvalid option.")?,
                Reply::NotANumber => writeln!(self.out, "\nPlease enter a valid number.")?,
            }
        }
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "===============================")?;
        writeln!(self.out, "    {}", view::TITLE)?;
        writeln!(self.out, "===============================")?;
        self.print_current_monster()?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", view::score_line(self.store))?;
        writeln!(self.out, "{}", view::collected_line(self.store))?;
        writeln!(self.out, "{}", view::next_evolution_line(self.store))?;
        writeln!(self.out, "\n===== MENU =====")?;
        writeln!(self.out, "1. Add drink")?;
        writeln!(self.out, "2. View the collection of freaks")?;
        writeln!(self.out, "3. Change active freak")?;
        writeln!(self.out, "4. View drink history")?;
        writeln!(self.out, "0. Exit")
    }

    fn print_current_monster(&mut self) -> io::Result<()> {
        let monster = self.store.selected_type();
        let stage = self.store.selected_stage();
        writeln!(self.out, "{}", monster.art(stage).trim_matches('\n'))?;
        writeln!(self.out, "{}", view::monster_line(monster))?;
        writeln!(self.out, "{}", view::stage_line(stage))
    }

    fn add_drink_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n===== ADD HYDRATION =====")?;
        for (i, kind) in DrinkKind::ALL.iter().enumerate() {
            writeln!(self.out, "{}", view::drink_option_line(i + 1, *kind))?;
        }
        writeln!(self.out, "0. Cancel")?;

        let kind = match self.prompt_number("\nSelect drink type: ")? {
            Reply::Eof | Reply::Number(0) => return Ok(()),
            Reply::Number(n) => match usize::try_from(n).ok().and_then(DrinkKind::from_menu_number) {
                Some(kind) => kind,
                None => return writeln!(self.out, "\nInvalid selection."),
            },
            Reply::NotANumber => return writeln!(self.out, "\nPlease enter valid numbers."),
        };

        let Some(line) = self.prompt("\nEnter amount in milliliters (ml): ")? else {
            return Ok(());
        };
        let amount: f64 = match line.trim().parse() {
            Ok(v) => v,
            Err(_) => return writeln!(self.out, "\nPlease enter valid numbers."),
        };
        if !amount.is_finite() || amount <= 0.0 {
            return writeln!(self.out, "How do you consume negative {kind}?");
        }

        match self.store.record_drink(kind, amount) {
            Ok(receipt) => {
                writeln!(self.out, "\nAdded {amount}ml of {kind}!")?;
                if let Err(e) = &receipt.saved {
                    writeln!(self.out, "Error saving game: {e}")?;
                }
                if receipt.evolved {
                    writeln!(self.out, "Your freak just evolved!!!")?;
                    self.print_current_monster()?;
                }
                if let Some(monster) = receipt.unlocked {
                    writeln!(self.out, "A {monster} egg has hatched! Select it from the menu.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "\n{e}"),
        }
    }

    fn show_collection(&mut self) -> io::Result<()> {
        let collection = self.store.collection();
        if collection.iter().all(|&(_, stage)| stage == 0) {
            return writeln!(self.out, "\nYour collection is empty. Drink more water!");
        }

        writeln!(self.out, "\n===== MONSTER COLLECTION =====")?;
        for (monster, stage) in collection {
            writeln!(self.out, "{}", view::collection_line(monster, stage))?;
        }
        Ok(())
    }

    fn change_monster(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n===== SELECT MONSTER =====")?;
        for monster in MonsterType::ALL {
            writeln!(self.out, "{}", view::select_line(self.store, monster))?;
        }
        writeln!(
            self.out,
            "\nEnter the number of the monster you want to select (or 0 to cancel):"
        )?;

        match self.prompt_number("> ")? {
            Reply::Eof | Reply::Number(0) => Ok(()),
            Reply::Number(n) => {
                let Some(monster) = usize::try_from(n).ok().and_then(MonsterType::from_menu_number) else {
                    return writeln!(self.out, "\nInvalid selection.");
                };
                if !self.store.is_unlocked(monster) {
                    return writeln!(self.out, "\nThat monster is locked! Drink more to unlock it.");
                }
                writeln!(self.out, "\nYou selected: {monster}")?;
                if let Err(e) = self.store.select_monster(monster) {
                    writeln!(self.out, "Error saving game: {e}")?;
                }
                Ok(())
            }
            Reply::NotANumber => writeln!(self.out, "\nPlease enter a valid number."),
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n====== DRINK HISTORY ======")?;

        let recent = self.store.recent_drinks(self.history_limit);
        if recent.entries.is_empty() {
            return writeln!(self.out, "No drink recorded yet.");
        }
        for (i, entry) in recent.entries.iter().enumerate() {
            writeln!(self.out, "{}", view::history_line(i + 1, entry))?;
        }
        if recent.hidden > 0 {
            writeln!(self.out, "\n{}", view::hidden_line(recent.hidden))?;
        }
        Ok(())
    }

    /// Print `label` and read one line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_number(&mut self, label: &str) -> io::Result<Reply> {
        Ok(match self.prompt(label)? {
            None => Reply::Eof,
            Some(line) => match line.trim().parse() {
                Ok(n) => Reply::Number(n),
                Err(_) => Reply::NotANumber,
            },
        })
    }
}

/// Run headless mode on the process's stdin and stdout
pub fn run_headless(store: &mut EvolutionStore, history_limit: usize) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Headless::new(store, history_limit, stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_core::GameConfig;
    use tempfile::TempDir;

    fn play(store: &mut EvolutionStore, script: &str) -> String {
        let mut out = Vec::new();
        Headless::new(store, 10, script.as_bytes(), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn new_store(dir: &TempDir) -> EvolutionStore {
        let config = GameConfig::new().with_save_path(dir.path().join("save.json"));
        EvolutionStore::from_config(&config).0
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "0\n");
        assert!(output.contains("H Y D R O"));
        assert!(output.contains("Thanks for playing, stay hydrated!"));
    }

    #[test]
    fn test_eof_exits() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "");
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn test_add_water_and_evolve() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "1\n1\n150\n0\n");

        assert!(output.contains("Added 150ml of water!"));
        assert!(output.contains("Your freak just evolved!!!"));
        assert!(output.contains("Total hydration score: 150.0"));
        assert_eq!(store.selected_stage(), 1);
        assert!(store.save_path().exists());
    }

    #[test]
    fn test_input_errors_keep_looping() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "abc\n9\n1\n7\n1\nxyz\n1\n2\n-5\n0\n");

        assert!(output.contains("Please enter a valid number."));
        assert!(output.contains("Invalid option."));
        assert!(output.contains("Invalid selection."));
        assert!(output.contains("Please enter valid numbers."));
        assert!(output.contains("How do you consume negative soda?"));
        assert_eq!(store.hydration_score(), 0.0);
    }

    #[test]
    fn test_locked_monster() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "3\n4\n0\n");

        assert!(output.contains("4. Ember [Locked]"));
        assert!(output.contains("That monster is locked!"));
        assert_eq!(store.selected_type(), MonsterType::Blob);
    }

    #[test]
    fn test_hatch_and_switch() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "1\n1\n500\n3\n2\n2\n0\n");

        assert!(output.contains("A Sprout egg has hatched!"));
        assert!(output.contains("You selected: Sprout"));
        assert!(output.contains("Blob: Evolution stage 3/3"));
        assert!(output.contains("Sprout: Evolution stage 0/3"));
        assert_eq!(store.selected_type(), MonsterType::Sprout);
    }

    #[test]
    fn test_history() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "4\n0\n");
        assert!(output.contains("No drink recorded yet."));

        for i in 1..=12 {
            store.record_drink(DrinkKind::Coffee, f64::from(i)).unwrap();
        }
        let output = play(&mut store, "4\n0\n");
        assert!(output.contains("1. "));
        assert!(output.contains("12ml of coffee"));
        assert!(output.contains("...and 2 more entries."));
        assert!(!output.contains(": 1ml of coffee"));
    }

    #[test]
    fn test_empty_collection() {
        let dir = TempDir::new().unwrap();
        let mut store = new_store(&dir);
        let output = play(&mut store, "2\n0\n");
        assert!(output.contains("Your collection is empty. Drink more water!"));
    }
}
