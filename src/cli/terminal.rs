use super::Menu;
use crate::session::Manager;
use crate::session::Prompt;
use crate::tree::Branch;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;

/// Interactive play against a [`Manager`] on stdin/stdout.
pub struct Terminal(Manager);

impl From<Manager> for Terminal {
    fn from(manager: Manager) -> Self {
        Self(manager)
    }
}

impl Terminal {
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("{}", "Think of an animal and I will try to guess it.".bold());
        loop {
            let selection = Select::new()
                .with_prompt("\nWhat next?")
                .report(false)
                .items(&Menu::ALL)
                .default(0)
                .interact()?;
            match Menu::ALL[selection] {
                Menu::Play => self.round()?,
                Menu::Tree => println!("{}", self.0.game().display()),
                Menu::Stats => println!("{}", self.0.report()),
                Menu::Animals => println!("{}", self.0.items().join(", ")),
                Menu::Quit => break,
            }
        }
        Ok(())
    }

    fn round(&mut self) -> anyhow::Result<()> {
        let mut progress = self.0.start();
        while let Prompt::Question(ref question) = progress.prompt {
            let label = format!("Q{} {}", progress.questions + 1, question);
            let branch = self.ask(&label)?;
            progress = self.0.answer(branch)?;
        }
        let ref guess = progress.prompt;
        match self.ask(&guess.to_string())? {
            Branch::Yes => {
                self.0.verdict(true, "")?;
                let n = progress.questions;
                println!("{}", format!("Got it in {} questions!", n).green().bold());
            }
            Branch::No => self.teach(guess.text())?,
        }
        let round = self.0.finish()?;
        log::debug!("{}", round);
        Ok(())
    }

    fn teach(&mut self, guess: &str) -> anyhow::Result<()> {
        println!("{}", "You win! Help me learn.".yellow());
        let item = Self::text("What was your animal?")?;
        self.0.verdict(false, &item)?;
        let question = Self::text(&format!(
            "Give me a yes/no question that tells a {} from a {}",
            item, guess
        ))?;
        let answer = self.ask(&format!("For a {}, the answer is", item))?;
        self.0.teach(&item, &question, answer)?;
        println!("{}", format!("Thanks, I now know about the {}.", item).green());
        Ok(())
    }

    fn ask(&self, prompt: &str) -> anyhow::Result<Branch> {
        let choices = [Branch::Yes, Branch::No];
        let selection = Select::new()
            .with_prompt(prompt.bold().to_string())
            .items(&["Yes", "No"])
            .default(0)
            .interact()?;
        Ok(choices[selection])
    }

    fn text(prompt: &str) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| -> Result<(), &str> {
                match input.trim().is_empty() {
                    true => Err("Please type something"),
                    false => Ok(()),
                }
            })
            .interact_text()
            .map(|input| input.trim().to_string())
            .map_err(anyhow::Error::from)
    }
}
