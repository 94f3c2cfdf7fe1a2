use {
    crate::{CountryCode, EventDataClient, EventDataError, EventFile},
    log::info,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Download each of `files` with `client`, in order, into `output`.
///
/// Files are named `<country code>_<file name>`. The directory is created if needed. The first
/// failure stops the run; files already written are left in place.
pub fn download_files(
    client: &EventDataClient,
    files: &[EventFile],
    output: &Path,
) -> Result<Vec<PathBuf>, EventDataError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let name = file.output_name(client.country_code());
        info!("Downloading {}...", name);
        let data = client.fetch_file(*file)?;
        written.push(save_file(output, &name, &data)?);
    }

    Ok(written)
}

/// Download `files` for each of `country_codes`, one country code after another.
///
/// `make_client` builds the client for a country code. Every retrieval is a separate request
/// sequence; nothing runs concurrently. Returns the paths written, in download order.
pub fn download_all<F>(
    country_codes: &[CountryCode],
    files: &[EventFile],
    output: &Path,
    mut make_client: F,
) -> Result<Vec<PathBuf>, EventDataError>
where
    F: FnMut(CountryCode) -> Result<EventDataClient, EventDataError>,
{
    let mut written = Vec::with_capacity(country_codes.len() * files.len());

    for country_code in country_codes {
        let client = make_client(*country_code)?;
        written.extend(download_files(&client, files, output)?);
    }

    Ok(written)
}

/// Write `data` to `output/name`, creating `output` if it does not exist.
pub fn save_file(output: &Path, name: &str, data: &[u8]) -> Result<PathBuf, EventDataError> {
    fs::create_dir_all(output)?;
    let path = output.join(name);
    fs::write(&path, data)?;
    info!("Saved {} ({} bytes)", path.display(), data.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::save_file;

    #[test_log::test]
    fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("out");
        let path = save_file(&output, "en_sale.tsv", b"1\t2\n").unwrap();
        assert_eq!(path, output.join("en_sale.tsv"));
        assert_eq!(std::fs::read(&path).unwrap(), b"1\t2\n");

        // Overwrites an existing file.
        save_file(&output, "en_sale.tsv", b"3").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"3");
    }
}
