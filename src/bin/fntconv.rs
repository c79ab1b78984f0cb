fn main() -> anyhow::Result<()> {
    fntconv::cli::run_cli()
}
