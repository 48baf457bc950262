use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use log::{info, LevelFilter};
use tabled::{builder::Builder, Style};

use protosql::convert::{decode_row, RowMessage};
use protosql::ddl::{create_table, create_tables};
use protosql::protocol::{SearchRequest, User};
use protosql::util::row::Row;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = "None")]
struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "snake_case")]
enum Command {
    /// Prints the comma separated insert columns of a message
    Columns {
        message: MessageKind,
    },
    /// Prints CREATE TABLE statements, for one message or all of them
    #[clap(aliases = &["schema"])]
    Ddl {
        message: Option<MessageKind>,
    },
    /// Decodes an encoded message and prints the row it inserts as
    Row {
        message: MessageKind,
        /// File holding the encoded message (default is stdin)
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MessageKind {
    SearchRequest,
    User,
}

impl MessageKind {
    fn columns(self) -> &'static [&'static str] {
        match self {
            MessageKind::SearchRequest => SearchRequest::COLUMNS,
            MessageKind::User => User::COLUMNS,
        }
    }

    fn column_names(self) -> String {
        match self {
            MessageKind::SearchRequest => SearchRequest::column_names(),
            MessageKind::User => User::column_names(),
        }
    }

    fn create_table(self) -> String {
        match self {
            MessageKind::SearchRequest => create_table::<SearchRequest>(),
            MessageKind::User => create_table::<User>(),
        }
    }

    fn decode_row(self, bytes: &[u8]) -> Result<Row, protosql::ConvertError> {
        match self {
            MessageKind::SearchRequest => decode_row::<SearchRequest>(bytes),
            MessageKind::User => decode_row::<User>(bytes),
        }
    }
}

fn init_log(level: &str) -> Result<(), Box<dyn Error>> {
    let level = LevelFilter::from_str(level).map_err(|e| format!("bad log level {}: {}", level, e))?;
    env_logger::Builder::new()
        .filter(None, level)
        .parse_default_env()
        .init();
    Ok(())
}

fn read_input(input: Option<PathBuf>) -> Result<Vec<u8>, Box<dyn Error>> {
    let bytes = match input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(bytes)
}

fn print_row(columns: &[&str], row: Row) {
    let mut builder = Builder::default();
    builder.set_columns(columns.iter().map(|c| c.to_string()));
    builder.add_record(row.iter().map(|v| v.to_string()));

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{}", table);
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.cmd {
        Command::Columns { message } => println!("{}", message.column_names()),
        Command::Ddl { message: Some(message) } => println!("{}", message.create_table()),
        Command::Ddl { message: None } => println!("{}", create_tables()),
        Command::Row { message, input } => {
            let bytes = read_input(input)?;
            info!("read {} bytes", bytes.len());
            let row = message.decode_row(&bytes)?;
            print_row(message.columns(), row);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = init_log(&args.log_level).and_then(|_| run(args)) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use prost::Message;
    use protosql::protocol::user::Stamps;
    use protosql::util::dbtype::Value;
    use protosql::ConvertError;

    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("protosql").chain(argv.iter().copied()))
    }

    #[test]
    fn test_parse_columns() {
        let args = parse(&["columns", "search-request"]).unwrap();
        assert!(matches!(
            args.cmd,
            Command::Columns {
                message: MessageKind::SearchRequest
            }
        ));
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_parse_ddl() {
        let args = parse(&["ddl"]).unwrap();
        assert!(matches!(args.cmd, Command::Ddl { message: None }));

        let args = parse(&["--log-level", "debug", "schema", "user"]).unwrap();
        assert!(matches!(
            args.cmd,
            Command::Ddl {
                message: Some(MessageKind::User)
            }
        ));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_parse_row() {
        let args = parse(&["row", "user", "--input", "user.bin"]).unwrap();
        match args.cmd {
            Command::Row { message, input } => {
                assert!(matches!(message, MessageKind::User));
                assert_eq!(input, Some(PathBuf::from("user.bin")));
            }
            other => panic!("expected row, got {:?}", other),
        }

        let args = parse(&["row", "search-request"]).unwrap();
        assert!(matches!(args.cmd, Command::Row { input: None, .. }));
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse(&["columns", "order"]).is_err());
        assert!(parse(&["columns", "search_request"]).is_err());
        assert!(parse(&["columns"]).is_err());
        assert!(parse(&["drop"]).is_err());
    }

    #[test]
    fn test_column_names() {
        assert_eq!(
            MessageKind::SearchRequest.column_names(),
            "query,page_number,result_per_page,PROTO_BINARY"
        );
        assert_eq!(
            MessageKind::User.column_names(),
            "id,username,Age,sgender,s,stamps,PROTO_BINARY"
        );
        assert_eq!(MessageKind::User.columns().len(), 7);
        assert_eq!(MessageKind::SearchRequest.columns().len(), 4);
    }

    #[test]
    fn test_decode_rows() {
        let request = SearchRequest {
            query: "rust".to_string(),
            page_number: 1,
            result_per_page: 20,
        };
        let row = MessageKind::SearchRequest
            .decode_row(&request.encode_to_vec())
            .unwrap();
        assert_eq!(row.len(), 4);
        assert_eq!(row[0], Value::String("rust".to_string()));

        let user = User {
            id: 7,
            username: "ann".to_string(),
            age: None,
            sgender: 1,
            s: "hi".to_string(),
            stamps: Some(Stamps::default()),
        };
        let row = MessageKind::User.decode_row(&user.encode_to_vec()).unwrap();
        assert_eq!(row.len(), 7);
        assert_eq!(row[2], Value::Null);
        assert_eq!(row[3], Value::String("FEMALE".to_string()));
        assert_eq!(row[5], Value::String("{}".to_string()));
    }

    #[test]
    fn test_decode_errors() {
        // Wire type 6 does not exist.
        assert!(matches!(
            MessageKind::SearchRequest.decode_row(b"foo"),
            Err(ConvertError::Decode(_))
        ));

        let user = User {
            sgender: 5,
            ..Default::default()
        };
        assert!(matches!(
            MessageKind::User.decode_row(&user.encode_to_vec()),
            Err(ConvertError::UnknownEnumCode { code: 5, .. })
        ));
    }

    #[test]
    fn test_run_row_from_file() {
        let dir = std::env::temp_dir().join(format!("protosql_cli_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let good = dir.join("user.bin");
        let user = User {
            id: 3,
            sgender: 0,
            ..Default::default()
        };
        std::fs::write(&good, user.encode_to_vec()).unwrap();
        assert!(run(parse(&["row", "user", "--input", good.to_str().unwrap()]).unwrap()).is_ok());

        let bad = dir.join("bad.bin");
        std::fs::write(&bad, b"foo").unwrap();
        let err = run(parse(&["row", "search-request", "-i", bad.to_str().unwrap()]).unwrap())
            .unwrap_err();
        assert!(err.to_string().starts_with("decode error"));

        let missing = dir.join("missing.bin");
        assert!(run(parse(&["row", "user", "-i", missing.to_str().unwrap()]).unwrap()).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
