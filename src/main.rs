fn main() -> anyhow::Result<()> {
    shapekit::cli::run()
}
