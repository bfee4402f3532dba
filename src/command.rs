use std::str::FromStr;

use crate::filters::Diet;
use crate::FinderError;

pub const HELP: &str = "\
Commands:
  search <text>          recipe name (empty clears)
  ingredients <a, b>     ingredients to use
  diet <option>          none, vegetarian, vegan, keto, low-carb
  allergies <a, b>       ingredients you're allergic to
  calories <min> <max>   calorie range
  view <n>               open result n
  star <n>               star or unstar result n
  back                   back to recipes
  saved                  saved recipes
  main                   back to main
  refresh                render again
  help                   this text
  quit                   leave";

/// One line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Ingredients(String),
    Diet(Diet),
    Allergies(String),
    Calories(u32, u32),
    /// 1-based position in the current listing
    View(usize),
    /// 1-based position in the current listing
    Star(usize),
    Back,
    Saved,
    Main,
    Refresh,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = FinderError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" => Ok(Command::Search(rest.to_string())),
            "ingredients" => Ok(Command::Ingredients(rest.to_string())),
            "diet" => Ok(Command::Diet(rest.parse()?)),
            "allergies" => Ok(Command::Allergies(rest.to_string())),
            "calories" => {
                let values: Vec<&str> = rest.split_whitespace().collect();
                match values.as_slice() {
                    [min, max] => Ok(Command::Calories(number(min)?, number(max)?)),
                    _ => Err(FinderError::InvalidInput(
                        "usage: calories <min> <max>".to_string(),
                    )),
                }
            }
            "view" => Ok(Command::View(position(rest)?)),
            "star" | "unstar" => Ok(Command::Star(position(rest)?)),
            "back" => Ok(Command::Back),
            "saved" => Ok(Command::Saved),
            "main" => Ok(Command::Main),
            "refresh" | "" => Ok(Command::Refresh),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(FinderError::InvalidInput(format!(
                "unknown command '{}', type 'help'",
                other
            ))),
        }
    }
}

fn number(text: &str) -> Result<u32, FinderError> {
    text.parse()
        .map_err(|_| FinderError::InvalidInput(format!("'{}' is not a number", text)))
}

fn position(text: &str) -> Result<usize, FinderError> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(FinderError::InvalidInput(format!(
            "expected a result number, got '{}'",
            text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_edits() {
        assert_eq!(
            "search  garlic soup ".parse::<Command>().unwrap(),
            Command::Search("garlic soup".to_string())
        );
        assert_eq!(
            "search".parse::<Command>().unwrap(),
            Command::Search(String::new())
        );
        assert_eq!(
            "allergies Peanuts, SHELLFISH".parse::<Command>().unwrap(),
            Command::Allergies("Peanuts, SHELLFISH".to_string())
        );
        assert_eq!(
            "diet Low-Carb".parse::<Command>().unwrap(),
            Command::Diet(Diet::LowCarb)
        );
        assert_eq!(
            "calories 100 800".parse::<Command>().unwrap(),
            Command::Calories(100, 800)
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!("view 2".parse::<Command>().unwrap(), Command::View(2));
        assert_eq!("STAR 1".parse::<Command>().unwrap(), Command::Star(1));
        assert_eq!("back".parse::<Command>().unwrap(), Command::Back);
        assert_eq!("saved".parse::<Command>().unwrap(), Command::Saved);
        assert_eq!("".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_invalid_input() {
        assert!("view 0".parse::<Command>().is_err());
        assert!("view two".parse::<Command>().is_err());
        assert!("calories 100".parse::<Command>().is_err());
        assert!("diet paleo".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }
}
