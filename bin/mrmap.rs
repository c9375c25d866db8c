use std::path::PathBuf;

use clap::Parser;
use mrmap::mr::MapTask;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mrmap", about = "Run one map task and write its shard files")]
struct Args {
    /// map application (wc, indexer)
    app: String,
    /// input partition
    input_file: PathBuf,
    #[arg(long, default_value = "mr")]
    job: String,
    #[arg(long, default_value_t = 0)]
    task: usize,
    /// number of reduce tasks that will consume the output
    #[arg(long, default_value_t = 8)]
    shards: usize,
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let app = mrmap::mrapps::get_app(&args.app)?;
    let task = MapTask::new(args.job, args.task, args.input_file, args.shards)
        .with_output_dir(args.out_dir);
    let output = task.run(app.as_ref()).await?;

    for shard in &output.outputs {
        println!("{}\t{}\t{}", shard.shard, shard.records, shard.path.display());
    }
    Ok(())
}
