//! Console commands standing in for clicks, typing and scrolling.

use std::path::PathBuf;

use compriassist_core::{ContactField, FileSelection, Msg, ProductField};
use compriassist_engine::{file_display_name, guess_mime};
use thiserror::Error;

pub const HELP: &str = "\
Comandos:
  scroll <px>                   desplaza la página
  nav <sección>                 enlace de navegación (inicio, modulos, demo, ...)
  menu | outside | top          menú móvil, clic fuera del menú, volver arriba
  tab <panel>                   chatbot | sentiment | visual | generative
  chat                          abre o cierra el chat
  type <texto> | send           escribe en el chat / envía
  say <texto>                   escribe y envía
  chip <n>                      pulsa la sugerencia n (desde 1)
  review <texto> | analyze      análisis de sentimiento
  hover on|off | drop <ruta>    búsqueda visual
  product name|category|features|price <valor>
  generate                      genera la descripción
  contact name|email|message <valor> | submit
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid value {value:?} for `{command}`")]
    InvalidValue {
        command: &'static str,
        value: String,
    },
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let one = |msg: Msg| -> Result<Command, ParseError> { Ok(Command::Dispatch(vec![msg])) };
    match word {
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "scroll" => {
            let offset = rest.parse::<f64>().map_err(|_| ParseError::InvalidValue {
                command: "scroll",
                value: rest.to_string(),
            })?;
            one(Msg::Scrolled { offset })
        }
        "nav" => one(Msg::NavLinkClicked {
            target: required("nav", rest)?,
        }),
        "menu" => one(Msg::MenuToggled),
        "outside" => one(Msg::ClickedOutsideNav),
        "top" => one(Msg::ScrollTopClicked),
        "tab" => one(Msg::TabClicked {
            target: required("tab", rest)?,
        }),
        "chat" => one(Msg::ChatToggled),
        "type" => one(Msg::ChatInputChanged(rest.to_string())),
        "send" => one(Msg::ChatSubmitted),
        "say" => Ok(Command::Dispatch(vec![
            Msg::ChatInputChanged(rest.to_string()),
            Msg::ChatSubmitted,
        ])),
        "chip" => {
            let index = rest
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .ok_or_else(|| ParseError::InvalidValue {
                    command: "chip",
                    value: rest.to_string(),
                })?;
            one(Msg::SuggestionClicked(index))
        }
        "review" => one(Msg::ReviewChanged(rest.to_string())),
        "analyze" => one(Msg::AnalyzeClicked),
        "hover" => match rest {
            "on" => one(Msg::UploadHovered(true)),
            "off" => one(Msg::UploadHovered(false)),
            other => Err(ParseError::InvalidValue {
                command: "hover",
                value: other.to_string(),
            }),
        },
        "drop" => {
            let path = PathBuf::from(required("drop", rest)?);
            let file = FileSelection {
                name: file_display_name(&path),
                mime: guess_mime(&path),
                path,
            };
            Ok(Command::Dispatch(vec![
                Msg::UploadHovered(false),
                Msg::FileDropped(file),
            ]))
        }
        "product" => {
            let (field, value) = field_and_value("product", rest)?;
            let field = match field {
                "name" => ProductField::Name,
                "category" => ProductField::Category,
                "features" => ProductField::Features,
                "price" => ProductField::Price,
                other => {
                    return Err(ParseError::InvalidValue {
                        command: "product",
                        value: other.to_string(),
                    })
                }
            };
            one(Msg::ProductFieldChanged { field, value })
        }
        "generate" => one(Msg::GenerateClicked),
        "contact" => {
            let (field, value) = field_and_value("contact", rest)?;
            let field = match field {
                "name" => ContactField::Name,
                "email" => ContactField::Email,
                "message" => ContactField::Message,
                other => {
                    return Err(ParseError::InvalidValue {
                        command: "contact",
                        value: other.to_string(),
                    })
                }
            };
            one(Msg::ContactFieldChanged { field, value })
        }
        "submit" => one(Msg::ContactSubmitted),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn required(command: &'static str, rest: &str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(rest.to_string())
    }
}

/// `<field> <value...>`; the value may be empty to clear the field.
fn field_and_value<'a>(
    command: &'static str,
    rest: &'a str,
) -> Result<(&'a str, String), ParseError> {
    match rest.split_once(char::is_whitespace) {
        Some((field, value)) => Ok((field, value.trim().to_string())),
        None if !rest.is_empty() => Ok((rest, String::new())),
        None => Err(ParseError::MissingArgument(command)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(line: &str) -> Vec<Msg> {
        match parse(line) {
            Ok(Command::Dispatch(msgs)) => msgs,
            other => panic!("{line:?} parsed to {other:?}"),
        }
    }

    #[test]
    fn blank_lines_do_nothing() {
        assert_eq!(parse("   "), Ok(Command::Nothing));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("help"), Ok(Command::Help));
    }

    #[test]
    fn say_types_then_submits() {
        assert_eq!(
            dispatch("say  ¿Dónde está mi pedido? "),
            vec![
                Msg::ChatInputChanged("¿Dónde está mi pedido?".to_string()),
                Msg::ChatSubmitted,
            ]
        );
    }

    #[test]
    fn chips_are_numbered_from_one() {
        assert_eq!(dispatch("chip 1"), vec![Msg::SuggestionClicked(0)]);
        assert!(matches!(
            parse("chip 0"),
            Err(ParseError::InvalidValue { command: "chip", .. })
        ));
    }

    #[test]
    fn drop_guesses_the_mime_type() {
        match dispatch("drop /tmp/fotos/zapato.jpg").as_slice() {
            [Msg::UploadHovered(false), Msg::FileDropped(file)] => {
                assert_eq!(file.name, "zapato.jpg");
                assert_eq!(file.mime, "image/jpeg");
                assert!(file.is_image());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn product_fields_keep_spaces_in_values() {
        assert_eq!(
            dispatch("product features ligera, impermeable"),
            vec![Msg::ProductFieldChanged {
                field: ProductField::Features,
                value: "ligera, impermeable".to_string(),
            }]
        );
        assert_eq!(
            dispatch("product price"),
            vec![Msg::ProductFieldChanged {
                field: ProductField::Price,
                value: String::new(),
            }]
        );
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(parse("bailar"), Err(ParseError::Unknown("bailar".to_string())));
        assert_eq!(parse("nav"), Err(ParseError::MissingArgument("nav")));
        assert!(parse("scroll mucho").is_err());
        assert!(parse("hover maybe").is_err());
        assert!(parse("contact phone 123").is_err());
    }
}
