// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pnmseam::{
    energy_to_image, mark_horizontal_seam, mark_vertical_seam, Carve, PixelGrid, SeamCarver,
    SeamFinder,
};
use std::io;

use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use failure::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn io_args<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("input")
            .help("The image to read")
            .required(true)
            .index(1),
    )
    .arg(
        Arg::with_name("output")
            .help("Where to write the result; the extension picks the format")
            .required(true)
            .index(2),
    )
}

fn direction_arg<'a, 'b>(cmd: App<'a, 'b>) -> App<'a, 'b> {
    cmd.arg(
        Arg::with_name("horizontal")
            .long("horizontal")
            .short("H")
            .help("Use a horizontal seam (shrinks the height) instead of a vertical one"),
    )
}

fn direction(matches: &ArgMatches) -> Carve {
    if matches.is_present("horizontal") {
        Carve::Height
    } else {
        Carve::Width
    }
}

fn load(matches: &ArgMatches) -> Result<SeamCarver, Error> {
    // Both are required, so clap has already refused a missing one.
    let path = matches.value_of("input").unwrap_or_default();
    let image = image::open(path)?.to_rgb8();
    info!(path, width = image.width(), height = image.height(), "loaded");
    Ok(SeamCarver::new(PixelGrid::from_image(&image)?))
}

fn output(matches: &ArgMatches) -> String {
    matches.value_of("output").unwrap_or_default().to_string()
}

fn energy(matches: &ArgMatches) -> Result<(), Error> {
    let carver = load(matches)?;
    energy_to_image(&carver.calculate_pixel_energy()).save(output(matches))?;
    Ok(())
}

fn remove(matches: &ArgMatches) -> Result<(), Error> {
    let mut carver = load(matches)?;
    let seam = carver.carve_once(direction(matches))?;
    info!(length = seam.len(), width = carver.width(), height = carver.height(), "carved");
    carver.into_grid().to_rgb_image().save(output(matches))?;
    Ok(())
}

fn mark(matches: &ArgMatches) -> Result<(), Error> {
    let carver = load(matches)?;
    let mut image = carver.grid().to_rgb_image();
    match direction(matches) {
        Carve::Width => mark_vertical_seam(&mut image, &carver.find_vertical_seam())?,
        Carve::Height => mark_horizontal_seam(&mut image, &carver.find_horizontal_seam())?,
    }
    image.save(output(matches))?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = App::new("pnmseam")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving, one seam at a time")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every step (overrides RUST_LOG)"),
        )
        .subcommand(io_args(
            SubCommand::with_name("energy").about("Write the energy map as a graymap"),
        ))
        .subcommand(direction_arg(io_args(
            SubCommand::with_name("remove").about("Remove the cheapest seam"),
        )))
        .subcommand(direction_arg(io_args(
            SubCommand::with_name("mark").about("Paint the cheapest seam in red"),
        )))
        .get_matches();

    let filter = if matches.is_present("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match matches.subcommand() {
        ("energy", Some(sub)) => energy(sub),
        ("remove", Some(sub)) => remove(sub),
        ("mark", Some(sub)) => mark(sub),
        _ => unreachable!("clap requires a subcommand"),
    }
}
