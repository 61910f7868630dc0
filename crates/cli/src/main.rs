//! Process entry point: runs the fixed demonstration flow against the
//! default snapshot file in the working directory.

use std::path::Path;

use stockroom_store::DEFAULT_INVENTORY_PATH;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    stockroom_cli::run(Path::new(DEFAULT_INVENTORY_PATH))
}
