use super::{print_analysis, print_health_summary, print_prices, print_weather_summary};
use crate::analyzer::{self, HealthClassifier};
use crate::config::Config;
use crate::error::{FarmVisionError, Result};
use crate::registry::{self, RegisterOutcome, RegistrationForm};
use crate::router::{Navigation, Page, Pages};
use crate::scanner;
use crate::session::SessionState;
use crate::weather::{self, OpenWeatherClient, WeatherProvider};
use async_trait::async_trait;
use dialoguer::{Input, Select};
use farm_vision_common::{Crop, MarketPriceTable};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

/// 対話セッションの描画面
pub struct ConsoleUi {
    config: Config,
    classifier: Box<dyn HealthClassifier>,
    market: MarketPriceTable,
    weather: Option<Box<dyn WeatherProvider>>,
}

impl ConsoleUi {
    pub fn new(config: Config, classifier: Box<dyn HealthClassifier>) -> Self {
        Self {
            config,
            classifier,
            market: MarketPriceTable::standard(),
            weather: None,
        }
    }

    /// 天気プロバイダを差し替え（未指定なら設定からOpenWeatherMapクライアントを作る）
    pub fn with_weather_provider(mut self, provider: Box<dyn WeatherProvider>) -> Self {
        self.weather = Some(provider);
        self
    }

    fn provider(&mut self) -> Result<&dyn WeatherProvider> {
        if self.weather.is_none() {
            self.weather = Some(Box::new(OpenWeatherClient::from_config(&self.config)?));
        }
        self.weather.as_deref().ok_or(FarmVisionError::MissingApiKey)
    }

    /// ページ末尾のメニュー
    fn next_step(&self, current: Page, action: Option<&str>) -> Result<Navigation> {
        let mut choices: Vec<(String, Navigation)> = Vec::new();
        if let Some(label) = action {
            choices.push((label.to_string(), Navigation::Stay));
        }
        for page in Page::NAVIGATION {
            if page != current {
                choices.push((format!("Go to {}", page.title()), Navigation::GoTo(page)));
            }
        }
        choices.push(("🚪 Quit".to_string(), Navigation::Quit));

        let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
        let index = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        Ok(choices[index].1)
    }

    fn prompt_text(label: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }
}

#[async_trait]
impl Pages for ConsoleUi {
    fn shell_header(&mut self, current: Page) {
        println!("\n🌱 AI-Powered Field Monitoring & Market Advisory System");
        let nav: Vec<String> = Page::NAVIGATION
            .iter()
            .map(|page| {
                if *page == current {
                    format!("[{}]", page.title())
                } else {
                    format!(" {} ", page.title())
                }
            })
            .collect();
        println!("{}", nav.join("  "));
        println!("---");
    }

    async fn home(&mut self, _session: &mut SessionState) -> Result<Navigation> {
        println!("\n🌱 Farm Vision");
        println!();
        println!("From seed to harvest, we safeguard your plants with intelligent");
        println!("disease prediction for a greener tomorrow");
        println!("Predict. Protect. Prosper\n");

        let index = Select::new()
            .items(&["Get Started", "Quit"])
            .default(0)
            .interact()?;

        Ok(match index {
            0 => Navigation::GoTo(Page::Registration),
            _ => Navigation::Quit,
        })
    }

    async fn registration(&mut self, session: &mut SessionState) -> Result<Navigation> {
        println!("👨‍🌾 Farmer Registration\n");

        if let Some(farmer) = session.farmer() {
            println!("✔ Registered as {} ({})", farmer.name, farmer.primary_crop);
            return self.next_step(Page::Registration, None);
        }

        let name = Self::prompt_text("Full Name")?;
        let phone = Self::prompt_text("Phone Number")?;
        let state = Self::prompt_text("State")?;
        let district = Self::prompt_text("District")?;
        let village = Self::prompt_text("Village")?;
        let crop_names: Vec<&str> = Crop::ALL.iter().map(|c| c.name()).collect();
        let crop_index = Select::new()
            .with_prompt("Primary Crop")
            .items(&crop_names)
            .default(0)
            .interact()?;

        let form = RegistrationForm {
            name,
            phone,
            state,
            district,
            village,
            primary_crop: Crop::ALL[crop_index],
        };

        if registry::register(session, &form)? == RegisterOutcome::Registered {
            if let Some(farmer) = session.farmer() {
                println!("✅ Welcome {}! You are registered.", farmer.name);
            }
        }

        self.next_step(Page::Registration, None)
    }

    async fn monitoring(&mut self, session: &mut SessionState) -> Result<Navigation> {
        println!("📷 Crop Health Monitoring\n");

        let registered = session.is_registered();
        if !registered {
            println!("⚠ Please register first to upload images and run analysis.");
        } else {
            let input = Self::prompt_text("Crop leaf image or folder (jpg/jpeg/png, empty to skip)")?;
            let input = input.trim();

            if !input.is_empty() {
                let batch = scanner::load_images(Path::new(input))?;
                for skipped in &batch.skipped {
                    self.report_error(skipped);
                }
                if batch.images.is_empty() {
                    println!("⚠ No JPEG/PNG images found in {}", input);
                }

                for image in &batch.images {
                    println!("\n🖼 {} ({}, {} bytes)", image.file_name, image.kind, image.bytes.len());
                    println!("🔍 Running AI analysis...");
                    let result = analyzer::analyze(session, image, self.classifier.as_ref())?;
                    print_analysis(&result);
                }
            }
        }

        print_health_summary(session.history());

        let action = registered.then_some("🔍 Analyse another image");
        self.next_step(Page::Monitoring, action)
    }

    async fn prices(&mut self, session: &mut SessionState) -> Result<Navigation> {
        println!("📈 Market Intelligence\n");

        let Some(farmer) = session.farmer() else {
            println!("⚠ Please register first to view market prices.");
            return self.next_step(Page::Prices, None);
        };

        let crops = self.market.crops();
        let crop_names: Vec<&str> = crops.iter().map(|c| c.name()).collect();
        let default_crop = crops
            .iter()
            .position(|c| *c == farmer.primary_crop)
            .unwrap_or(0);
        let crop_index = Select::new()
            .with_prompt("Select your crop")
            .items(&crop_names)
            .default(default_crop)
            .interact()?;
        let crop = crops[crop_index];

        let markets: Vec<&str> = self
            .market
            .prices_for(crop)?
            .iter()
            .map(|p| p.market.as_str())
            .collect();
        let market_index = Select::new()
            .with_prompt("Select nearest market")
            .items(&markets)
            .default(0)
            .interact()?;

        println!();
        print_prices(&self.market, crop, Some(markets[market_index]))?;

        self.next_step(Page::Prices, Some("📊 Check another crop"))
    }

    async fn weather_report(&mut self, session: &mut SessionState) -> Result<Navigation> {
        println!("☁️ Weather Report\n");

        let location = match session.farmer() {
            Some(farmer) => {
                println!(
                    "📍 Showing weather for your registered location: {}, {}",
                    farmer.district, farmer.state
                );
                farmer.district.clone()
            }
            None => {
                println!("Register to see weather for your specific location automatically.");
                Input::<String>::new()
                    .with_prompt("Enter your city or district for a weather forecast")
                    .default(self.config.default_location.clone())
                    .allow_empty(true)
                    .interact_text()?
            }
        };

        if location.trim().is_empty() {
            self.report_error(&FarmVisionError::LocationRequired);
            return self.next_step(Page::WeatherReport, None);
        }

        let (today, offset) = weather::local_today();
        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("Fetching forecast for {}...", location.trim()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let report = match self.provider() {
            Ok(provider) => weather::weather_report(provider, &location, today, offset).await,
            Err(e) => Err(e),
        };
        spinner.finish_and_clear();

        match report {
            Ok(summary) => print_weather_summary(location.trim(), &summary),
            Err(e) if e.is_recoverable() => self.report_error(&e),
            Err(e) => return Err(e),
        }

        self.next_step(Page::WeatherReport, Some("🔄 Refresh forecast"))
    }

    fn report_error(&mut self, error: &FarmVisionError) {
        eprintln!("⚠ {}", error);
    }
}
