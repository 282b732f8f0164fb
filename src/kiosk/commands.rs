use crate::controller::ListingChange;
use crate::listings::FilterField;

pub const HELP: &str = "\
Commands (join several with ';' to apply them as one action):
  search <text>       set the search text (use 'submit' to run it)
  submit              run the search from page 1
  find <text>         set the search text and submit
  min-price <n>       max-price <n>      bedrooms <n>
  type <house|apartment|condo>
  furnish <furnished|semifurnished|unfurnished>
  area <text>
  clear <field>       clear one filter
  page <n>            next | prev
  reset               clear everything and reload
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Change(ListingChange),
    Show,
    Help,
    Quit,
}

/// Parse one input line into commands, in order
pub fn parse_line(line: &str) -> Result<Vec<Command>, String> {
    let mut commands = Vec::new();
    for part in line.split(';') {
        if part.trim().is_empty() {
            continue;
        }
        commands.extend(parse_command(part)?);
    }
    Ok(commands)
}

fn parse_command(input: &str) -> Result<Vec<Command>, String> {
    let input = input.trim();
    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    let change = |c: ListingChange| -> Result<Vec<Command>, String> {
        Ok(vec![Command::Change(c)])
    };
    match word.to_ascii_lowercase().as_str() {
        "search" => change(ListingChange::SetSearchText(rest.to_string())),
        "submit" => change(ListingChange::SubmitSearch),
        "find" => Ok(vec![
            Command::Change(ListingChange::SetSearchText(rest.to_string())),
            Command::Change(ListingChange::SubmitSearch),
        ]),
        "clear" => {
            let field: FilterField = rest.parse()?;
            change(ListingChange::ClearFilter(field))
        }
        "page" => {
            let page = rest
                .parse::<u32>()
                .map_err(|_| format!("not a page number: {:?}", rest))?;
            change(ListingChange::SetPage(page))
        }
        "next" | "n" => change(ListingChange::NextPage),
        "prev" | "previous" | "p" => change(ListingChange::PreviousPage),
        "reset" => change(ListingChange::Reset),
        "show" | "ls" => Ok(vec![Command::Show]),
        "help" | "?" => Ok(vec![Command::Help]),
        "quit" | "exit" | "q" => Ok(vec![Command::Quit]),
        other => match other.parse::<FilterField>() {
            Ok(field) => change(ListingChange::SetFilter(field, rest.to_string())),
            Err(_) => Err(format!("unknown command: {} (try 'help')", word)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_paging() {
        assert_eq!(
            parse_line("min-price 250000; page 3").unwrap(),
            vec![
                Command::Change(ListingChange::SetFilter(
                    FilterField::MinPrice,
                    "250000".into()
                )),
                Command::Change(ListingChange::SetPage(3)),
            ]
        );
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            parse_line("search   lake house  ").unwrap(),
            vec![Command::Change(ListingChange::SetSearchText(
                "lake house".into()
            ))]
        );
    }

    #[test]
    fn find_submits() {
        let commands = parse_line("find loft").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1], Command::Change(ListingChange::SubmitSearch));
    }

    #[test]
    fn non_numeric_filter_is_accepted_as_text() {
        assert_eq!(
            parse_line("bedrooms lots").unwrap(),
            vec![Command::Change(ListingChange::SetFilter(
                FilterField::Bedrooms,
                "lots".into()
            ))]
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse_line("page two").is_err());
        assert!(parse_line("teleport").is_err());
        assert!(parse_line("clear colour").is_err());
    }

    #[test]
    fn blank_segments_are_skipped() {
        assert_eq!(parse_line(" ; ;").unwrap(), vec![]);
        assert_eq!(parse_line("q").unwrap(), vec![Command::Quit]);
    }
}
