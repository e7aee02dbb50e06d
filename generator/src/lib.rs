use anyhow::{anyhow, bail, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;

pub mod data;

use data::Industry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub movie_id: u32,
    pub title: String,
    pub industry: String,
    pub genre: String,
    pub language: String,
    pub release_year: u16,
    pub overview: String,
}

/// Share of the catalog per industry, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mix(pub Vec<(String, f64)>);

impl Default for Mix {
    fn default() -> Self {
        Mix(vec![("Hollywood".into(), 0.6), ("Bollywood".into(), 0.3), ("Lollywood".into(), 0.1)])
    }
}

impl std::str::FromStr for Mix {
    type Err = anyhow::Error;

    /// Parses `Hollywood=0.6,Bollywood=0.3,Lollywood=0.1`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = Vec::new();
        for item in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, share) = item.split_once('=').ok_or_else(|| anyhow!("expected NAME=SHARE, got '{item}'"))?;
            let industry = data::industry(name.trim()).ok_or_else(|| anyhow!("unknown industry '{}'", name.trim()))?;
            let share: f64 = share.trim().parse().map_err(|_| anyhow!("invalid share '{}'", share.trim()))?;
            if !(share >= 0.0) {
                bail!("share for {} must be non-negative", industry.name);
            }
            parts.push((industry.name.to_string(), share));
        }
        if parts.is_empty() {
            bail!("mix must name at least one industry");
        }
        Ok(Mix(parts))
    }
}

impl Mix {
    /// Per-industry counts summing exactly to `total`; the last industry takes the remainder.
    pub fn counts(&self, total: usize) -> Vec<(&'static Industry, usize)> {
        let sum: f64 = self.0.iter().map(|(_, s)| s).sum();
        let mut out = Vec::with_capacity(self.0.len());
        let mut assigned = 0usize;
        for (i, (name, share)) in self.0.iter().enumerate() {
            let Some(industry) = data::industry(name) else { continue };
            let n = if i + 1 == self.0.len() {
                total.saturating_sub(assigned)
            } else if sum > 0.0 {
                ((total as f64) * share / sum) as usize
            } else {
                0
            };
            assigned += n;
            out.push((industry, n));
        }
        out
    }
}

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

fn title(rng: &mut StdRng, industry: &Industry) -> String {
    match rng.gen_range(1..=4) {
        1 => pick(rng, industry.titles).to_string(),
        2 | 3 => format!("{} {}", pick(rng, industry.name_patterns), pick(rng, industry.titles)),
        _ => format!("{} {}", pick(rng, industry.titles), rng.gen_range(1..=5)),
    }
}

fn genres(rng: &mut StdRng, industry: &Industry) -> String {
    let n = rng.gen_range(1..=3).min(industry.genres.len());
    let selected: Vec<&str> = industry.genres.choose_multiple(rng, n).copied().collect();
    selected.join(" ")
}

fn overview(rng: &mut StdRng, genre: &str) -> String {
    let primary = genre.split_whitespace().next().unwrap_or("Drama");
    pick(rng, data::templates_for(primary)).to_string()
}

/// Generate `count` movies under `mix`, shuffled. Identical seeds give identical catalogs.
pub fn generate(count: usize, mix: &Mix, seed: u64) -> Vec<MovieRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut movies = Vec::with_capacity(count);
    let mut movie_id = 1u32;
    for (industry, n) in mix.counts(count) {
        tracing::info!(industry = industry.name, count = n, "generating movies");
        for _ in 0..n {
            let genre = genres(&mut rng, industry);
            movies.push(MovieRecord {
                movie_id,
                title: title(&mut rng, industry),
                industry: industry.name.to_string(),
                overview: overview(&mut rng, &genre),
                genre,
                language: industry.language.to_string(),
                release_year: rng.gen_range(1970..=2024),
            });
            movie_id += 1;
        }
    }
    movies.shuffle(&mut rng);
    movies
}

/// Write `movies` as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, movies: &[MovieRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for movie in movies {
        wtr.serialize(movie)?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub count: usize,
    pub seed: u64,
    pub mix: Mix,
    pub created_at: String,
}

/// Sidecar manifest path: `movies.csv` -> `movies.meta.json`.
pub fn manifest_path(output: &Path) -> PathBuf {
    output.with_extension("meta.json")
}

/// Generate a catalog, write it to `output` as CSV and its manifest alongside it.
pub fn write_dataset(output: &Path, count: usize, mix: &Mix, seed: u64) -> Result<Manifest> {
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir)?;
    }
    let movies = generate(count, mix, seed);
    write_csv(BufWriter::new(File::create(output)?), &movies)?;

    let manifest = Manifest {
        count: movies.len(),
        seed,
        mix: mix.clone(),
        created_at: time::OffsetDateTime::now_utc().format(&Rfc3339).unwrap_or_default(),
    };
    fs::write(manifest_path(output), serde_json::to_string_pretty(&manifest)?)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_catalog() {
        let mix = Mix::default();
        assert_eq!(generate(200, &mix, 42), generate(200, &mix, 42));
        assert_ne!(generate(200, &mix, 42), generate(200, &mix, 7));
    }

    #[test]
    fn counts_sum_to_total() {
        let counts = Mix::default().counts(15_000);
        let n: Vec<usize> = counts.iter().map(|(_, n)| *n).collect();
        assert_eq!(n, vec![9000, 4500, 1500]);
        let odd: usize = Mix::default().counts(7).iter().map(|(_, n)| n).sum();
        assert_eq!(odd, 7);
    }

    #[test]
    fn mix_parsing() {
        let mix: Mix = "bollywood=1, Lollywood=1".parse().unwrap();
        assert_eq!(mix.0, vec![("Bollywood".to_string(), 1.0), ("Lollywood".to_string(), 1.0)]);
        assert!("Nollywood=1".parse::<Mix>().is_err());
        assert!("Hollywood".parse::<Mix>().is_err());
        assert!("Hollywood=-1".parse::<Mix>().is_err());
    }

    #[test]
    fn records_follow_industry_pools() {
        for m in generate(300, &Mix::default(), 1) {
            let industry = data::industry(&m.industry).unwrap();
            assert_eq!(m.language, industry.language);
            let genres: Vec<&str> = m.genre.split(' ').collect();
            assert!((1..=3).contains(&genres.len()));
            assert!(genres.iter().all(|g| industry.genres.contains(g)));
            assert!((1970..=2024).contains(&m.release_year));
            assert!(!m.overview.is_empty());
        }
    }

    #[test]
    fn csv_has_expected_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &generate(3, &Mix::default(), 42)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("movie_id,title,industry,genre,language,release_year,overview\n"));
        assert_eq!(text.lines().count(), 4);
    }
}
