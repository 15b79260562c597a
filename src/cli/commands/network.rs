//! Network query handlers: `path`, `components` and `network`

use music_graph::config::Config;
use music_graph::loader::parse_network_toml;
use music_graph::models::{MusicNetwork, SearchOrder};
use music_graph::{debug, error, info, verbose};
use std::path::{Path, PathBuf};

/// Locate a network file
///
/// A path that exists is used as given. Otherwise it is looked up in the configured
/// networks directory, with a `.toml` extension added when it has none.
pub fn resolve_network_path(file: &Path, networks_dir: &str) -> PathBuf {
    if file.exists() || networks_dir.is_empty() {
        return file.to_path_buf();
    }
    let candidate = Path::new(networks_dir).join(file);
    if candidate.extension().is_none() {
        let with_ext = candidate.with_extension("toml");
        if with_ext.exists() {
            return with_ext;
        }
    }
    candidate
}

/// Load the network named on the command line
///
/// # Errors
/// Returns a printable message if the file cannot be found or parsed
pub fn load_network(file: &Path, config: &Config) -> Result<MusicNetwork, String> {
    let path = resolve_network_path(file, &config.paths.networks_dir);
    debug!("Resolved network {} to {}", file.display(), path.display());
    let network = parse_network_toml(&path).map_err(|e| {
        error!("Failed to load network {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })?;
    info!("Network loaded: {}", path.display());
    verbose!("{network}");
    Ok(network)
}

fn report_failure(message: &str) -> bool {
    eprintln!("{message}");
    false
}

/// Run the `path` command
pub fn run_path(
    file: &Path,
    from: &str,
    to: &str,
    order: Option<SearchOrder>,
    cheapest: bool,
    config: &Config,
) -> bool {
    let network = match load_network(file, config) {
        Ok(network) => network,
        Err(e) => return report_failure(&e),
    };
    let graph = network.graph();
    let (from, to) = (from.to_string(), to.to_string());

    for name in [&from, &to] {
        if !graph.contains_node(name) {
            return report_failure(&format!("✗ Unknown entity: '{name}'"));
        }
    }

    if cheapest {
        return match graph.cheapest_path(&from, &to) {
            Some((cost, path)) => {
                println!("{}", path.join(" -> "));
                println!("Total weight: {cost}");
                true
            }
            None => {
                println!("No path from '{from}' to '{to}'");
                true
            }
        };
    }

    let order = order.unwrap_or_else(|| config.search_order());
    debug!("Searching {from} -> {to} ({order})");
    match graph.find_path_with(&from, &to, order) {
        Some(path) => {
            println!("{}", path.join(" -> "));
            verbose!("{} hops ({order})", path.len().saturating_sub(1));
        }
        None => println!("No path from '{from}' to '{to}'"),
    }
    true
}

/// Run the `components` command
pub fn run_components(file: &Path, config: &Config) -> bool {
    let network = match load_network(file, config) {
        Ok(network) => network,
        Err(e) => return report_failure(&e),
    };
    let components = network.graph().connected_components();
    println!(
        "{} connected group(s) in {}",
        components.len(),
        if network.name.is_empty() { "network" } else { &network.name }
    );
    for (index, group) in components.iter().enumerate() {
        println!("  {}. {}", index + 1, group.join(", "));
    }
    true
}

/// Run the `network` command
pub fn run_network(
    file: &Path,
    artist: Option<&str>,
    release: Option<&str>,
    connect: Option<&[String]>,
    config: &Config,
) -> bool {
    let network = match load_network(file, config) {
        Ok(network) => network,
        Err(e) => return report_failure(&e),
    };

    print!("{network}");
    let mut ok = true;

    if let Some(name) = artist {
        ok &= print_artist(&network, name);
    }
    if let Some(name) = release {
        ok &= print_release(&network, name);
    }
    if let Some([a, b]) = connect {
        match network.connection(a, b) {
            Some(path) => println!("\n{}", path.join(" - ")),
            None => println!("\n'{a}' and '{b}' are not connected"),
        }
    }
    ok
}

fn names<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined: Vec<&str> = items.map(String::as_str).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

fn print_artist(network: &MusicNetwork, name: &str) -> bool {
    let Some(artist) = network.get(name).and_then(|node| node.as_artist()) else {
        return report_failure(&format!("✗ No artist named '{name}'"));
    };
    println!("\n=== {} ===", artist.name);
    if !artist.profile.is_empty() {
        println!("{}", artist.profile);
    }
    println!(
        "Members:       {}",
        names(network.members_of(name).iter().map(|a| &a.name))
    );
    println!(
        "Member of:     {}",
        names(network.groups_of(name).iter().map(|a| &a.name))
    );
    println!(
        "Played on:     {}",
        names(network.releases_by(name).iter().map(|r| &r.name))
    );
    println!(
        "Collaborators: {}",
        names(network.collaborators(name).iter())
    );
    true
}

fn print_release(network: &MusicNetwork, name: &str) -> bool {
    let Some(release) = network.get(name).and_then(|node| node.as_release()) else {
        return report_failure(&format!("✗ No release named '{name}'"));
    };
    match release.year {
        Some(year) => println!("\n=== {} ({year}) ===", release.name),
        None => println!("\n=== {} ===", release.name),
    }
    println!(
        "Personnel:   {}",
        names(network.personnel(name).iter().map(|a| &a.name))
    );
    println!(
        "Recorded at: {}",
        names(network.studios_of(name).iter().map(|s| &s.name))
    );
    println!(
        "Appeared on: {}",
        names(network.appearances_of(name).iter().map(|r| &r.name))
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_prefers_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("here.toml");
        fs::write(&file, "").unwrap();
        assert_eq!(resolve_network_path(&file, "/elsewhere"), file);
    }

    #[test]
    fn test_resolve_falls_back_to_networks_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("jazz.toml"), "").unwrap();
        let networks_dir = dir.path().to_string_lossy().to_string();

        assert_eq!(
            resolve_network_path(Path::new("jazz"), &networks_dir),
            dir.path().join("jazz.toml")
        );
        assert_eq!(
            resolve_network_path(Path::new("jazz.toml"), &networks_dir),
            dir.path().join("jazz.toml")
        );
        assert_eq!(
            resolve_network_path(Path::new("missing"), ""),
            PathBuf::from("missing")
        );
    }
}
