pub mod fonts;
pub mod logo;
pub mod renderer;
pub mod style;
pub mod traits;
pub mod wrap;

use crate::{
    config::ImagenConfig,
    error::{OrDegrade, PosterError, Result},
    models::{LogoInput, LogoPosition, RenderResult},
};
use std::sync::Arc;

pub use fonts::FontSet;
pub use renderer::PosterRenderer;
pub use traits::PosterGenerator;

/// Top-level poster entry point.
///
/// A generator is only consulted when image-generation credentials are
/// configured; otherwise, and whenever the generator fails, the procedural
/// renderer produces the poster.
#[derive(Clone)]
pub struct PosterSynthesisService {
    renderer: PosterRenderer,
    imagen: ImagenConfig,
    generator: Option<Arc<dyn PosterGenerator>>,
}

impl PosterSynthesisService {
    pub fn new(renderer: PosterRenderer, imagen: ImagenConfig) -> Self {
        Self {
            renderer,
            imagen,
            generator: None,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn PosterGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn uses_generator(&self) -> bool {
        self.generator.is_some() && self.imagen.has_credentials()
    }

    pub async fn synthesize(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> RenderResult {
        if let Some(generator) = self.generator.as_ref().filter(|_| self.imagen.has_credentials()) {
            match generator.generate(enhanced_prompt, logo, position).await {
                Ok(result) => return result,
                Err(e) => log::warn!("Image generator failed, rendering placeholder: {}", e),
            }
        } else {
            log::debug!("No image-generation credentials, using procedural renderer");
        }

        self.render_placeholder(enhanced_prompt, logo, position)
            .await
            .or_degrade("placeholder render task", renderer::fallback_result)
    }

    async fn render_placeholder(
        &self,
        enhanced_prompt: &str,
        logo: Option<&LogoInput>,
        position: Option<LogoPosition>,
    ) -> Result<RenderResult> {
        let renderer = self.renderer.clone();
        let prompt = enhanced_prompt.to_string();
        let logo = logo.cloned();

        tokio::task::spawn_blocking(move || renderer.render(&prompt, logo.as_ref(), position))
            .await
            .map_err(|e| PosterError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PosterStyle;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGenerator {
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PosterGenerator for StubGenerator {
        async fn generate(
            &self,
            _enhanced_prompt: &str,
            _logo: Option<&LogoInput>,
            _position: Option<LogoPosition>,
        ) -> Result<RenderResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PosterError::Generation("quota exceeded".into()));
            }
            Ok(RenderResult {
                image: "data:image/png;base64,generated".into(),
                style: PosterStyle::CreativeModern,
                dimensions: "1024x1024".into(),
                success: true,
            })
        }
    }

    fn renderer() -> PosterRenderer {
        PosterRenderer::new(FontSet::empty())
    }

    #[tokio::test]
    async fn test_without_credentials_uses_renderer() {
        let generator = Arc::new(StubGenerator::new(false));
        let service = PosterSynthesisService::new(renderer(), ImagenConfig::default())
            .with_generator(generator.clone());

        let result = service.synthesize("retro arcade night", None, None).await;

        assert!(!service.uses_generator());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert!(result.success);
        assert_eq!(result.dimensions, "800x1200");
        assert_eq!(result.style, PosterStyle::VintageRetro);
        assert!(result.image.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_credentials_route_to_generator() {
        let generator = Arc::new(StubGenerator::new(false));
        let imagen = ImagenConfig::new().with_credentials("key", "project");
        let service =
            PosterSynthesisService::new(renderer(), imagen).with_generator(generator.clone());

        let result = service.synthesize("poster", None, None).await;

        assert!(service.uses_generator());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.dimensions, "1024x1024");
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_to_renderer() {
        let imagen = ImagenConfig::new().with_credentials("key", "project");
        let service = PosterSynthesisService::new(renderer(), imagen)
            .with_generator(Arc::new(StubGenerator::new(true)));

        let result = service.synthesize("minimalist clean", None, None).await;

        assert!(result.success);
        assert_eq!(result.dimensions, "800x1200");
        assert_eq!(result.style, PosterStyle::MinimalistClean);
    }

    #[tokio::test]
    async fn test_credentials_without_generator_uses_renderer() {
        let imagen = ImagenConfig::new().with_credentials("key", "project");
        let service = PosterSynthesisService::new(renderer(), imagen);

        let result = service.synthesize("art deco gala", None, None).await;
        assert!(!service.uses_generator());
        assert_eq!(result.style, PosterStyle::ArtDecoElegant);
    }

    #[tokio::test]
    async fn test_logo_survives_blocking_render() {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        let mut png = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(80, 80, Rgba([0, 0, 255, 255])))
            .write_to(&mut png, ImageFormat::Png)
            .unwrap();
        let logo = LogoInput::new("logo.png", png.into_inner());
        let service = PosterSynthesisService::new(renderer(), ImagenConfig::default());

        let result = service
            .synthesize("poster", Some(&logo), Some(LogoPosition::TopLeft))
            .await;
        assert!(result.success);

        let payload = result.image.strip_prefix("data:image/png;base64,").unwrap();
        let poster = image::load_from_memory(&STANDARD.decode(payload).unwrap())
            .unwrap()
            .to_rgb8();
        let [r, g, b] = poster.get_pixel(20, 20).0;
        assert!(r < 5 && g < 5 && b > 250);
        assert_ne!(poster.get_pixel(19, 19).0, [0, 0, 255]);
    }

    #[tokio::test]
    async fn test_failed_render_reports_fallback() {
        let service =
            PosterSynthesisService::new(renderer().with_canvas(10, 10), ImagenConfig::default());

        let result = service.synthesize("anything", None, None).await;
        assert!(!result.success);
        assert_eq!(result.dimensions, "400x600");
        assert!(result.image.starts_with("data:image/svg+xml;base64,"));
    }
}
