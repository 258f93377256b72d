use std::{fs::File, io::BufWriter, path::PathBuf};

use claywriter::{
    filter::Filter,
    pdf::Stream,
    resource::{EmbeddedFont, FontFormat},
    PdfWriter,
};
use structopt::StructOpt;

/// Write a PDF with a single page.
#[derive(StructOpt, Debug)]
#[structopt(name = "single-page")]
struct Opt {
    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,

    /// Page width in points
    #[structopt(long, default_value = "595")]
    width: f64,

    /// Page height in points
    #[structopt(long, default_value = "842")]
    height: f64,

    /// Fill opacity of the drawn rectangle
    #[structopt(long, default_value = "0.5")]
    opacity: f64,

    /// TrueType font used to draw `text`
    #[structopt(long, parse(from_os_str))]
    font: Option<PathBuf>,

    /// Text to draw, requires `font`
    #[structopt(long, default_value = "Hello World")]
    text: String,

    /// Compress the content stream
    #[structopt(long)]
    compress: bool,

    /// ASCII85 encode the content stream
    #[structopt(long)]
    ascii: bool,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let file = match File::create(&opt.output) {
        Ok(file) => file,
        Err(e) => {
            log::error!("Could not create {}: {}", opt.output.display(), e);
            return;
        }
    };
    let mut writer = PdfWriter::open(BufWriter::new(file), opt.width, opt.height);

    let gs = writer.opacity_resource(opt.opacity);
    let mut content = format!(
        "q /{} gs 1 0 0 rg {} {} {} {} re f Q\n",
        gs,
        opt.width / 4.0,
        opt.height / 4.0,
        opt.width / 2.0,
        opt.height / 2.0
    );

    if let Some(path) = &opt.font {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Could not read font {}: {}", path.display(), e);
                return;
            }
        };
        let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let font = EmbeddedFont::new(name, FontFormat::TrueType, data);
        match writer.font_resource(&font) {
            Ok(f) => content.push_str(&format!(
                "BT /{} 24 Tf 72 {} Td ({}) Tj ET\n",
                f,
                opt.height - 96.0,
                opt.text.replace('\\', "\\\\").replace('(', "\\(").replace(')', "\\)")
            )),
            Err(e) => log::error!("Skipping text: {}", e),
        }
    }

    let mut filters = Vec::new();
    if opt.compress {
        filters.push(Filter::Flate);
    }
    if opt.ascii {
        filters.push(Filter::Ascii85);
    }

    log::debug!("Write content stream with filters {:?}", filters);
    writer.write_object(Stream::new(content.into_bytes()).with_filters(filters));

    match writer.close() {
        Ok(_) => log::info!("Wrote {}", opt.output.display()),
        Err(e) => log::error!("Writing {} failed: {}", opt.output.display(), e),
    }
}
