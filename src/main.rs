use base64::{engine::general_purpose::STANDARD, Engine as _};
use posterforge::{
    logger::{self, LogLevel, LoggerConfig},
    LogoInput, LogoPosition, PosterConfig, PosterRequest, PosterStudio,
};
use std::{env, fs};

const DEFAULT_CONCEPT: &str = "jazz concert poster";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_loaded = dotenv::dotenv().is_ok();

    let level = env::var("POSTERFORGE_LOG")
        .map(|name| LogLevel::from_name(&name))
        .unwrap_or(LogLevel::Info);
    logger::init_with_config(LoggerConfig::development().with_level(level))?;

    if env_loaded {
        log::info!("✅ .env file loaded");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    // Usage: posterforge [concept] [logo-path] [position]
    let mut args = env::args().skip(1);
    let concept = args.next().unwrap_or_else(|| DEFAULT_CONCEPT.to_string());
    let logo_path = args.next();
    let position = args.next().map(|name| LogoPosition::from_name(&name));

    let config = PosterConfig::from_env();
    logger::log_config_info(&config);

    let studio = PosterStudio::from_config(config).await?;

    log::info!("✨ Enhancing concept: {}", concept);
    let (enhanced, _messages) = studio.enhance_prompt(&concept, None).await?;
    log::info!("📝 Enhanced prompt: {}", enhanced.enhanced_prompt);
    log::info!("🏷️  Keywords: {}", enhanced.keywords.join(", "));

    let logo = match &logo_path {
        Some(path) => {
            let bytes = fs::read(path)?;
            log::info!("🖼️  Using logo {} ({} bytes)", path, bytes.len());
            Some(LogoInput::new(path.clone(), bytes))
        }
        None => None,
    };

    let request = PosterRequest {
        user_prompt: concept,
        enhanced_prompt: enhanced.enhanced_prompt.clone(),
        keywords: enhanced.keywords.clone(),
        session_id: enhanced.session_id.clone(),
        logo_position: logo.as_ref().map(|_| position.unwrap_or_default()),
        logo,
    };

    let (poster, result) = studio.generate_poster_with_result(request).await?;
    log::info!("🎨 Style: {} | Dimensions: {}", poster.style, poster.dimensions);

    if result.success {
        if let Some(payload) = poster.poster_image.strip_prefix("data:image/png;base64,") {
            fs::write("poster.png", STANDARD.decode(payload)?)?;
            log::info!("💾 Poster written to poster.png");
        }
    } else {
        log::warn!("⚠️  Rendering failed, placeholder image served");
    }

    Ok(())
}
