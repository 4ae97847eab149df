//! remote_fs CLI - Manage files and folders on a remote storage API.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use remote_fs_client::{
    logging, CreateFolderRequest, Endpoint, FileUpload, ResourceId, StorageClient,
    UpdateFolderRequest,
};

/// CLI tool for a remote file storage API.
#[derive(Parser)]
#[command(name = "remote_fs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API host, scheme included (defaults to http://localhost).
    #[arg(long, env = "API_HOST")]
    host: Option<String>,

    /// API port (defaults to 8080).
    #[arg(long, env = "API_PORT")]
    port: Option<String>,

    /// Per-request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the content of a folder (the root when omitted).
    Ls {
        /// Folder ID.
        folder: Option<String>,
    },

    /// Create a folder.
    Mkdir {
        /// Name of the new folder.
        name: String,

        /// Parent folder ID.
        #[arg(long, short = 'p')]
        parent: Option<String>,
    },

    /// Rename a folder, optionally changing its parent.
    Rename {
        /// Folder ID.
        id: String,

        /// New name.
        name: String,

        /// Parent folder ID.
        #[arg(long, short = 'p')]
        parent: Option<String>,
    },

    /// Delete a folder.
    Rmdir {
        /// Folder ID.
        id: String,
    },

    /// Move a folder into another folder.
    Mvdir {
        /// Folder ID.
        id: String,

        /// Destination folder ID.
        #[arg(long, short = 't')]
        to: String,
    },

    /// Delete a file.
    Rm {
        /// File ID.
        id: String,
    },

    /// Move a file into another folder.
    Mv {
        /// File ID.
        id: String,

        /// Destination folder ID.
        #[arg(long, short = 't')]
        to: String,
    },

    /// Upload local files.
    Upload {
        /// Local files to upload.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Destination folder ID (the root when omitted).
        #[arg(long, short = 't')]
        to: Option<String>,
    },

    /// Download a file to the local filesystem.
    Download {
        /// File ID.
        id: String,

        /// Local destination path (file or directory).
        #[arg(long, short = 't', default_value = ".")]
        to: PathBuf,
    },

    /// Print the download URL of a file.
    Url {
        /// File ID.
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let endpoint = Endpoint::resolve(cli.host.as_deref(), cli.port.as_deref());
    let mut client = StorageClient::new(endpoint);
    if let Some(secs) = cli.timeout {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    match cli.command {
        Commands::Ls { folder } => {
            let folder_id = folder.as_deref().map(ResourceId::parse);
            let content = client
                .folders()
                .content(folder_id.as_ref())
                .await
                .with_context(|| format!("Failed to list folder: {}", folder.as_deref().unwrap_or("root")))?;

            if let Some(current) = &content.current_folder {
                println!("Folder {} ({})", current.id, current.name);
            }
            if content.is_empty() {
                println!("Empty folder.");
            } else {
                println!("{:<12} {:<8} {}", "ID", "TYPE", "NAME");
                println!("{}", "-".repeat(60));
                for folder in &content.folders {
                    println!("{}", folder);
                }
                for file in &content.files {
                    println!("{}", file);
                }
            }
        }

        Commands::Mkdir { name, parent } => {
            let request = CreateFolderRequest::new(name, parent.as_deref().map(ResourceId::parse));
            let created = client
                .folders()
                .create(&request)
                .await
                .with_context(|| format!("Failed to create folder: {}", request.name))?;
            println!("Created folder {}", created.id());
        }

        Commands::Rename { id, name, parent } => {
            let request = UpdateFolderRequest::new(
                ResourceId::parse(&id),
                name,
                parent.as_deref().map(ResourceId::parse),
            );
            client
                .folders()
                .update(&request)
                .await
                .with_context(|| format!("Failed to update folder: {}", id))?;
            println!("Updated folder {}", id);
        }

        Commands::Rmdir { id } => {
            client
                .folders()
                .delete(&ResourceId::parse(&id))
                .await
                .with_context(|| format!("Failed to delete folder: {}", id))?;
            println!("Deleted folder {}", id);
        }

        Commands::Mvdir { id, to } => {
            client
                .folders()
                .move_to(&ResourceId::parse(&id), &ResourceId::parse(&to))
                .await
                .with_context(|| format!("Failed to move folder {} to {}", id, to))?;
            println!("Moved folder {} to {}", id, to);
        }

        Commands::Rm { id } => {
            client
                .files()
                .delete(&ResourceId::parse(&id))
                .await
                .with_context(|| format!("Failed to delete file: {}", id))?;
            println!("Deleted file {}", id);
        }

        Commands::Mv { id, to } => {
            client
                .files()
                .move_to(&ResourceId::parse(&id), &ResourceId::parse(&to))
                .await
                .with_context(|| format!("Failed to move file {} to {}", id, to))?;
            println!("Moved file {} to {}", id, to);
        }

        Commands::Upload { mut paths, to } => {
            paths.sort();
            paths.dedup();
            let dest = to.as_deref().map(ResourceId::parse);

            println!(
                "Uploading {} file(s) to {}...",
                paths.len(),
                dest.as_ref().unwrap_or(&ResourceId::ROOT)
            );

            let mut failures = 0;
            for (idx, path) in paths.iter().enumerate() {
                let filename = path.file_name().unwrap_or_default().to_string_lossy();
                print!("[{}/{}] Uploading {}... ", idx + 1, paths.len(), filename);

                let result = match FileUpload::from_path(path).await {
                    Ok(upload) => client.files().upload(upload, dest.clone()).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(created) => println!("OK ({})", created.id()),
                    Err(e) => {
                        failures += 1;
                        println!("FAILED");
                        eprintln!("  Error: {}", e);
                    }
                }
            }

            if failures > 0 {
                anyhow::bail!("{} of {} upload(s) failed", failures, paths.len());
            }
            println!("Done.");
        }

        Commands::Download { id, to } => {
            if let Some(parent) = to.parent() {
                if !to.is_dir() && !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create directory: {:?}", parent))?;
                }
            }

            print!("Downloading {}... ", id);

            let saved = client
                .files()
                .download(&ResourceId::parse(&id), &to)
                .await
                .with_context(|| format!("Failed to download file: {}", id))?;

            println!("OK");
            println!("Saved to: {:?}", saved);
        }

        Commands::Url { id } => {
            println!("{}", client.files().download_url_for(&ResourceId::parse(&id)));
        }
    }

    Ok(())
}
