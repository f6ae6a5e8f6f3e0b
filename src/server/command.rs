use crate::server::session::Range;
use derive_more::Display;
use std::error::Error;
use std::str;

/// Parsed form of a control payload written to a file handle. Commands are
/// transient: they exist only for the duration of the write that carried
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `range <args...>`, where the arguments are interpreted against the
    /// kind of file the command is applied to
    Range(Vec<String>),
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CommandError {
    #[display(fmt = "empty command")]
    Empty,

    #[display(fmt = "command is not text")]
    NotText,

    #[display(fmt = "unknown command: {}", command)]
    Unknown { command: String },

    #[display(
        fmt = "{}: expected {} argument(s), got {}",
        command,
        expected,
        actual
    )]
    WrongArgumentCount {
        command: String,
        expected: usize,
        actual: usize,
    },

    #[display(fmt = "bad number: {}", field)]
    BadNumber { field: String },
}

impl Error for CommandError {}

impl Command {
    /// Tokenizes a raw write payload on whitespace and matches the leading
    /// verb against the recognized command set
    pub fn parse(data: &[u8]) -> Result<Self, CommandError> {
        let text =
            str::from_utf8(data).map_err(|_| CommandError::NotText)?;

        let mut fields = text.split_whitespace().map(String::from);
        let verb = fields.next().ok_or(CommandError::Empty)?;
        let args: Vec<String> = fields.collect();

        match verb.as_str() {
            "range" => Ok(Self::Range(args)),
            _ => Err(CommandError::Unknown { command: verb }),
        }
    }

    /// Applies the command to a handle's range. Nothing is assigned until
    /// every argument has parsed, so a failure leaves the range exactly as
    /// it was.
    pub fn apply_to(&self, range: &mut Range) -> Result<(), CommandError> {
        match self {
            Self::Range(args) => match range {
                Range::Integer { min, max } => {
                    expect_args("range", args, 2)?;
                    let new_min = parse_i64(&args[0])?;
                    let new_max = parse_i64(&args[1])?;

                    // Assigned verbatim; min is allowed to exceed max and
                    // generators reorder at sampling time
                    *min = new_min;
                    *max = new_max;
                    Ok(())
                }
                Range::Real { min, max } => {
                    expect_args("range", args, 1)?;
                    let value = parse_f64(&args[0])?;

                    // One value pins both bounds, so reads of the file then
                    // return exactly this value
                    *min = value;
                    *max = value;
                    Ok(())
                }
            },
        }
    }
}

fn expect_args(
    command: &str,
    args: &[String],
    expected: usize,
) -> Result<(), CommandError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(CommandError::WrongArgumentCount {
            command: command.to_string(),
            expected,
            actual: args.len(),
        })
    }
}

fn parse_i64(field: &str) -> Result<i64, CommandError> {
    field.parse().map_err(|_| CommandError::BadNumber {
        field: field.to_string(),
    })
}

fn parse_f64(field: &str) -> Result<f64, CommandError> {
    field.parse().map_err(|_| CommandError::BadNumber {
        field: field.to_string(),
    })
}
