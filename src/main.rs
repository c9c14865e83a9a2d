fn main() -> anyhow::Result<()> {
    llm_file_indexer::cli::run()
}
