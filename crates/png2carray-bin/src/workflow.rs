/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::canonicalize;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use png2carray::{convert_file, ConvertErrors, ConvertOptions};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, options: &ConvertOptions
) -> Result<(), ConvertErrors> {
    info!("Creating workflow from input");

    let (in_file, out_file) = match (args.get_one::<PathBuf>("in"), args.get_one::<PathBuf>("out")) {
        (Some(in_file), Some(out_file)) => (in_file, out_file),
        // both are required, clap refuses to get here without them
        _ => unreachable!("input and output are required arguments")
    };

    verify_file_paths(in_file, out_file)?;

    debug!("Converting {:?} into {:?}", in_file, out_file);

    convert_file(in_file, out_file, options)
}

fn verify_file_paths(in_path: &Path, out_path: &Path) -> Result<(), ConvertErrors> {
    if in_path == out_path {
        return Err(ConvertErrors::SamePath(in_path.to_path_buf()));
    }
    // catches `..` and links, only possible when both exist
    if let (Ok(real_in), Ok(real_out)) = (canonicalize(in_path), canonicalize(out_path)) {
        if real_in == real_out {
            return Err(ConvertErrors::SamePath(in_path.to_path_buf()));
        }
    }
    if out_path.exists() {
        info!("Overwriting path {:?}", out_path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs::{remove_file, write};
    use std::path::Path;

    use png2carray::ConvertErrors;

    use super::verify_file_paths;

    #[test]
    fn same_paths_are_rejected() {
        let path = Path::new("image.png");
        assert!(matches!(verify_file_paths(path, path), Err(ConvertErrors::SamePath(_))));
        assert!(verify_file_paths(path, Path::new("image.c")).is_ok());
    }

    #[test]
    fn spellings_of_one_file_are_rejected() {
        let dir = temp_dir();
        let name = format!("png2carray-{}-same.png", std::process::id());
        let path = dir.join(&name);
        write(&path, b"not read").unwrap();

        // `..` is not folded by path comparison, only by the filesystem
        let parent = dir.file_name().unwrap();
        let roundabout = dir.join("..").join(parent).join(&name);
        assert_ne!(path, roundabout);

        let result = verify_file_paths(&path, &roundabout);
        let _ = remove_file(&path);

        assert!(matches!(result, Err(ConvertErrors::SamePath(_))));
    }
}
