use crate::client::Client;
use crate::msg::content::{reply, request, Content, Reply, Request};
use crate::opts::{
    client::{ClientCommand, ClientOperation},
    schema::{SchemaSubcommand, SchemaType},
    serve::ServeCommand,
    Command, Opts,
};
use crate::server::ServerBuilder;
use crate::SchemaInfo;
use log::info;
use std::error::Error;

/// Primary entrypoint to run the executable based on input options
pub async fn run(opts: Opts) -> Result<(), Box<dyn Error>> {
    match opts.command {
        Command::Serve(c) => run_serve(c).await?,
        Command::Client(c) => run_client(c).await?,
        Command::Schema(c) => run_schema(c.command)?,
    }

    Ok(())
}

async fn run_serve(cmd: ServeCommand) -> Result<(), Box<dyn Error>> {
    info!("Launching server: {:?}", cmd);

    let server = ServerBuilder::default()
        .addr(cmd.addr)
        .service_name(cmd.service_name)
        .seed(cmd.seed)
        .buffer(cmd.buffer)
        .build()?
        .listen()
        .await?;

    println!("Serving on {}", server.addr());
    server.wait().await?;

    Ok(())
}

async fn run_client(cmd: ClientCommand) -> Result<(), Box<dyn Error>> {
    info!("Launching client: {:?}", cmd);

    let mut client = Client::connect(cmd.addr).await?;
    client.timeout = cmd.timeout;

    let attached = client.ask_attach(&cmd.uname).await?;

    match cmd.operation {
        ClientOperation::Ls => {
            client.ask_open(attached.id).await?;
            let listing = client.ask_read_dir(attached.id, 0).await?;
            for entry in listing.entries {
                println!("{}", entry.name);
            }
        }
        ClientOperation::Read(op) => {
            client.ask_walk(attached.id, &op.name).await?;
            client.ask_open(attached.id).await?;
            let contents =
                client.ask_read_file(attached.id, op.count).await?;
            print!("{}", String::from_utf8_lossy(&contents.data));
        }
        ClientOperation::Write(op) => {
            client.ask_walk(attached.id, &op.name).await?;
            client.ask_open(attached.id).await?;
            client
                .ask_write(attached.id, op.command.as_bytes().to_vec())
                .await?;
            if op.then_read {
                let contents =
                    client.ask_read_file(attached.id, 128).await?;
                print!("{}", String::from_utf8_lossy(&contents.data));
            }
        }
        ClientOperation::Stat(op) => {
            if op.name != ".." {
                client.ask_walk(attached.id, &op.name).await?;
            }
            let stat = client.ask_stat(attached.id).await?;
            println!("{}", serde_json::to_string_pretty(&stat)?);
        }
    }

    client.ask_release(attached.id).await?;

    Ok(())
}

fn run_schema(cmd: SchemaSubcommand) -> Result<(), Box<dyn Error>> {
    use strum::VariantNames;
    match cmd {
        SchemaSubcommand::List => {
            for v in SchemaType::VARIANTS {
                println!("{}", v);
            }
        }
        SchemaSubcommand::Info(info) => println!(
            "{}",
            match info.schema_type {
                SchemaType::Content => Content::schema(),
                SchemaType::Request => Request::schema(),
                SchemaType::Reply => Reply::schema(),
                SchemaType::HeartbeatRequest
                | SchemaType::VersionRequest => String::from("{}"),
                SchemaType::AttachRequest => request::AttachArgs::schema(),
                SchemaType::WalkRequest => request::WalkArgs::schema(),
                SchemaType::OpenRequest => request::OpenArgs::schema(),
                SchemaType::ReadRequest => request::ReadArgs::schema(),
                SchemaType::WriteRequest => request::WriteArgs::schema(),
                SchemaType::StatRequest => request::StatArgs::schema(),
                SchemaType::ReleaseRequest => {
                    request::ReleaseArgs::schema()
                }
                SchemaType::VersionReply => reply::VersionArgs::schema(),
                SchemaType::AttachReply => reply::AttachedArgs::schema(),
                SchemaType::WalkReply => reply::WalkedArgs::schema(),
                SchemaType::OpenReply => reply::OpenedArgs::schema(),
                SchemaType::ReadFileReply => {
                    reply::FileContentsArgs::schema()
                }
                SchemaType::ReadDirReply => {
                    reply::DirContentsArgs::schema()
                }
                SchemaType::WriteReply => reply::WrittenArgs::schema(),
                SchemaType::StatReply => reply::StatReplyArgs::schema(),
                SchemaType::ReleaseReply => reply::ReleasedArgs::schema(),
                SchemaType::ErrorReply => reply::ReplyError::schema(),
            }
        ),
    }

    Ok(())
}
