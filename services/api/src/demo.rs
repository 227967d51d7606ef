use clap::{Args, ValueEnum};
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use stayfront::config::AppConfig;
use stayfront::error::AppError;
use stayfront::forms::{FormCatalog, RawRecord, UploadedFile};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also print the sample payloads being validated
    #[arg(long)]
    pub(crate) show_payloads: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Form schema to validate against
    #[arg(long, value_enum)]
    pub(crate) form: FormKind,
    /// Path to a JSON payload (or to the image file itself for --form image)
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub(crate) enum FormKind {
    Profile,
    Property,
    Career,
    Review,
    Image,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = FormCatalog::default();

    println!("Form validation demo");

    for (label, form, payload) in sample_payloads() {
        if args.show_payloads {
            println!("\n{label}: {payload}");
        }
        let record = object(payload);
        let outcome = match form {
            FormKind::Profile => catalog.validate_profile(record).map(|v| json!(v)),
            FormKind::Property => catalog.validate_property(record).map(|v| json!(v)),
            FormKind::Career => catalog.validate_career(record).map(|v| json!(v)),
            FormKind::Review => catalog.validate_review(record).map(|v| json!(v)),
            FormKind::Image => unreachable!("image samples are built separately"),
        };

        match outcome {
            Ok(validated) => println!("- {label}: accepted {validated}"),
            Err(err) => println!("- {label}: rejected ({err})"),
        }
    }

    let oversized = UploadedFile {
        file_name: "brochure.pdf".to_string(),
        content_type: Some("application/pdf".parse().expect("static mime parses")),
        size_bytes: 4 * 1024 * 1024,
    };
    match catalog.validate_image(&oversized) {
        Ok(upload) => println!("- image (oversized pdf): accepted {}", upload.file_name),
        Err(err) => println!("- image (oversized pdf): rejected ({err})"),
    }

    println!("\nRemote image hosts permitted by configuration:");
    for host in &config.images.remote_hosts {
        println!("  - {host}");
    }

    Ok(())
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let catalog = FormCatalog::default();

    if let FormKind::Image = args.form {
        let metadata = std::fs::metadata(&args.file)?;
        let file_name = args
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.file.display().to_string());
        let file = UploadedFile {
            file_name,
            content_type: mime_guess::from_path(&args.file).first(),
            size_bytes: metadata.len(),
        };

        let upload = catalog.validate_image(&file)?;
        println!(
            "accepted {} ({} bytes, {})",
            upload.file_name, upload.size_bytes, upload.content_type
        );
        return Ok(());
    }

    let raw = std::fs::read_to_string(&args.file)?;
    let record: RawRecord = serde_json::from_str(&raw)?;

    let validated = match args.form {
        FormKind::Profile => json!(catalog.validate_profile(record)?),
        FormKind::Property => json!(catalog.validate_property(record)?),
        FormKind::Career => json!(catalog.validate_career(record)?),
        FormKind::Review => json!(catalog.validate_review(record)?),
        FormKind::Image => unreachable!("handled above"),
    };

    println!("{}", serde_json::to_string_pretty(&validated)?);
    Ok(())
}

fn object(payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        other => unreachable!("demo payloads are objects, got {other:?}"),
    }
}

fn sample_payloads() -> Vec<(&'static str, FormKind, Value)> {
    let description = vec!["bright"; 14].join(" ");
    vec![
        (
            "profile (valid)",
            FormKind::Profile,
            json!({ "firstName": "Linh", "lastName": "Tran", "username": "linhtran" }),
        ),
        (
            "profile (short fields)",
            FormKind::Profile,
            json!({ "firstName": "L", "lastName": "T", "username": "linhtran" }),
        ),
        (
            "property (valid)",
            FormKind::Property,
            json!({
                "name": "Riverside Homestay",
                "tagline": "Quiet rooms five minutes from the Han river",
                "price": "450",
                "category": "homestay",
                "description": description.clone(),
                "country": "Vietnam",
                "guests": 4,
                "amenities": "wifi, breakfast, bicycle rental",
            }),
        ),
        (
            "property (thin description)",
            FormKind::Property,
            json!({
                "name": "Riverside Homestay",
                "tagline": "Quiet rooms",
                "price": "450",
                "category": "homestay",
                "description": "too short to count",
                "country": "Vietnam",
                "guests": 4,
                "amenities": "wifi",
            }),
        ),
        (
            "career (valid)",
            FormKind::Career,
            json!({
                "name": "Nguyen Van An",
                "phone": "0912345678",
                "description": description.clone(),
            }),
        ),
        (
            "career (landline phone)",
            FormKind::Career,
            json!({
                "name": "Nguyen Van An",
                "phone": "0241234567",
                "description": description.clone(),
            }),
        ),
        (
            "review (valid)",
            FormKind::Review,
            json!({
                "propertyId": "prop-0042",
                "rating": "5",
                "comment": "Spotless rooms and a generous breakfast.",
            }),
        ),
        (
            "review (rating out of range)",
            FormKind::Review,
            json!({
                "propertyId": "prop-0042",
                "rating": 9,
                "comment": "Spotless rooms and a generous breakfast.",
            }),
        ),
    ]
}
