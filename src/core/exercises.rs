//! Exercise walkthroughs
//!
//! Each section rebuilds its sample data, runs a group of checks and logs a success line
//! per passed group. The first failing check stops the run and is returned as the error.

use crate::core::models::{Graph, List, Node, SearchOrder};
use crate::core::samples;
use crate::{debug, info, success};
use std::fmt;
use std::str::FromStr;

/// Which exercises to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Linked list exercises
    List,
    /// Binary tree and BST exercises
    Tree,
    /// Path and component exercises on the sample graphs
    Graph,
    /// Music network queries on the sample network
    Network,
    /// Everything, in the order above
    #[default]
    All,
}

impl Section {
    /// Every individual section, in run order
    pub const EACH: [Self; 4] = [Self::List, Self::Tree, Self::Graph, Self::Network];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "list",
            Self::Tree => "tree",
            Self::Graph => "graph",
            Self::Network => "network",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" | "lists" => Ok(Self::List),
            "tree" | "trees" => Ok(Self::Tree),
            "graph" | "graphs" => Ok(Self::Graph),
            "network" | "music" => Ok(Self::Network),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "Unknown exercise section: '{s}' (expected list, tree, graph, network or all)"
            )),
        }
    }
}

/// Run the exercises of `section`
///
/// # Errors
/// Returns a description of the first check that failed
pub fn run(section: Section) -> Result<(), String> {
    match section {
        Section::List => run_list(),
        Section::Tree => run_tree(),
        Section::Graph => run_graph(),
        Section::Network => run_network(),
        Section::All => Section::EACH.into_iter().try_for_each(run),
    }
}

fn check(passed: bool, what: &str) -> Result<(), String> {
    if passed {
        debug!("ok: {what}");
        Ok(())
    } else {
        Err(format!("check failed: {what}"))
    }
}

fn run_list() -> Result<(), String> {
    let ls0: List<i32> = List::new();
    let ls1 = samples::ls1();
    let ls2 = samples::ls2();
    let mut ls3 = samples::ls3();

    info!("ls0 = {ls0}");
    info!("ls1 = {ls1}");
    info!("ls2 = {ls2}");
    info!("ls3 = {ls3}");

    check(ls0.is_empty(), "ls0 is empty")?;
    check(ls1.len() == 1, "ls1 has length 1")?;
    check(ls2.len() == 3, "ls2 has length 3")?;
    check(ls2.len() == ls3.len(), "ls2 and ls3 have the same length")?;
    success!("Length tests passed");

    check(ls2.contains(&3), "3 is a member of ls2")?;
    check(ls2.contains(&2), "2 is a member of ls2")?;
    check(ls2.contains(&1), "1 is a member of ls2")?;
    success!("member tests passed");

    check(ls2.get(2) == Some(&3), "ls2[2] == 3")?;
    check(ls2.get(500).is_none(), "ls2[500] is out of bounds")?;
    check(ls2.get(0) == Some(&1), "ls2[0] == 1")?;
    success!("val_at tests passed");

    check(!ls3.contains(&-1), "-1 is not yet in ls3")?;
    ls3.insert(1, -1);
    check(ls3.contains(&-1), "-1 is in ls3 after insert")?;
    check(ls3.get(1) == Some(&-1), "ls3[1] == -1")?;
    check(ls3.get(0) == Some(&2), "ls3[0] == 2")?;
    check(ls3.get(2) == Some(&1), "ls3[2] == 1")?;
    success!("insert tests passed");
    Ok(())
}

#[allow(clippy::float_cmp)]
fn run_tree() -> Result<(), String> {
    let t0 = samples::t0();
    let t1 = samples::t1();
    let t2 = samples::t2();
    let t3 = samples::t3();
    info!("t3 = {t3}");

    check(t0.is_empty(), "t0 has 0 elements")?;
    check(t1.len() == 1, "t1 has 1 element")?;
    check(t2.len() == 2, "t2 has 2 elements")?;
    check(t3.len() == 9, "t3 has 9 elements")?;
    success!("size tests passed");

    check(t0.height() == 0, "t0 has height 0")?;
    check(t1.height() == 1, "t1 has height 1")?;
    check(t2.height() == 2, "t2 has height 2")?;
    check(t3.height() == 4, "t3 has height 4")?;
    success!("height tests passed");

    check(t0.to_vec().is_empty(), "t0 in order is []")?;
    check(t1.to_vec() == [1.0], "t1 in order is [1]")?;
    check(t2.to_vec() == [4.0, 1.0], "t2 in order is [4, 1]")?;
    check(
        t3.to_vec() == [-1.0, 0.0, 1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        "t3 in order is sorted",
    )?;
    success!("to_list tests passed");

    check(t0.is_bst(), "t0 is a BST")?;
    check(t1.is_bst(), "t1 is a BST")?;
    check(!t2.is_bst(), "t2 is not a BST")?;
    check(t3.is_bst(), "t3 is a BST")?;
    success!("bst test checks passed");

    let mut t0_bst = t0.to_bst();
    let mut t1_bst = t1.to_bst();
    let mut t2_bst = t2.to_bst();
    let mut t4 = samples::t4();

    check(t0_bst.is_empty(), "t0 as BST has 0 elements")?;
    check(t1_bst.len() == 1 && t1_bst.to_vec().len() == 1, "t1 as BST has 1 element")?;
    check(t2_bst.len() == 2 && t2_bst.to_vec().len() == 2, "t2 as BST has 2 elements")?;
    check(t4.len() == 9 && t4.to_vec().len() == 9, "t4 has 9 elements")?;
    check(t4.to_vec() == t3.to_vec(), "t4 holds the same values as t3")?;
    success!("build_bst tests passing");

    for bst in [&mut t0_bst, &mut t1_bst, &mut t2_bst, &mut t4] {
        bst.insert(2.5);
        check(bst.as_tree().is_bst(), "BST property holds after inserting 2.5")?;
    }
    check(t2_bst.to_vec() == [1.0, 2.5, 4.0], "t2 as BST is [1, 2.5, 4]")?;
    success!("BST insert tests passing");

    check(t2_bst.contains(&1.0), "1 is in t2 as BST")?;
    check(t2_bst.contains(&2.5), "2.5 is in t2 as BST")?;
    check(t2_bst.contains(&4.0), "4 is in t2 as BST")?;
    check(!t2_bst.contains(&0.0), "0 is not in t2 as BST")?;
    success!("BST exists tests passing");
    Ok(())
}

fn expect_paths(
    label: &str,
    graph: &Graph<Node<u32>>,
    connected: &[(u32, u32)],
    disconnected: &[(u32, u32)],
) -> Result<(), String> {
    for (start, end) in connected {
        check(
            graph.path_exists(start, end),
            &format!("{label}: path {start} -> {end} exists"),
        )?;
        let dfs = graph.find_path_with(start, end, SearchOrder::DepthFirst);
        check(
            dfs.is_some_and(|path| path.first() == Some(start) && path.last() == Some(end)),
            &format!("{label}: depth-first path {start} -> {end} has the right ends"),
        )?;
    }
    for (start, end) in disconnected {
        check(
            !graph.path_exists(start, end),
            &format!("{label}: no path {start} -> {end}"),
        )?;
    }
    Ok(())
}

fn sorted_components(graph: &Graph<Node<u32>>) -> Vec<Vec<u32>> {
    let mut groups = graph.connected_components();
    for group in &mut groups {
        group.sort_unstable();
    }
    groups.sort_unstable_by_key(|group| group.first().copied());
    groups
}

fn run_graph() -> Result<(), String> {
    let g1 = samples::g1();
    let g2 = samples::g2();

    expect_paths(
        "G1",
        &g1,
        &[
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (1, 0),
            (2, 0),
            (3, 2),
            (6, 4),
            (4, 5),
        ],
        &[(4, 6), (5, 6), (0, 6), (0, 4)],
    )?;
    expect_paths(
        "G2",
        &g2,
        &[(9, 1), (5, 1), (4, 0), (7, 3)],
        &[(2, 9), (5, 4), (9, 6), (7, 8)],
    )?;
    success!("Path Exists tests passed!");

    check(
        sorted_components(&g1) == vec![vec![0, 1, 2, 3], vec![4, 5, 6]],
        "G1 splits into [0,1,2,3] and [4,5,6]",
    )?;
    check(
        sorted_components(&g2) == vec![vec![0, 4, 6], vec![1, 2, 5, 9], vec![3, 7], vec![8]],
        "G2 splits into [0,4,6], [1,2,5,9], [3,7] and [8]",
    )?;
    success!("Show Subgroups tests passed!");
    Ok(())
}

fn run_network() -> Result<(), String> {
    let network = samples::jazz_network();
    info!("{}", network.to_string().trim_end());

    let personnel: Vec<&str> = network
        .personnel("Kind of Blue")
        .iter()
        .map(|artist| artist.name.as_str())
        .collect();
    check(personnel.len() == 7, "Kind of Blue has seven players")?;
    check(
        personnel.contains(&"Bill Evans") && personnel.contains(&"Wynton Kelly"),
        "both pianists played on Kind of Blue",
    )?;
    check(
        network.members_of("Miles Davis Sextet").len() == 6,
        "the sextet has six members",
    )?;
    check(
        network.groups_of("Wynton Kelly").is_empty(),
        "Wynton Kelly is not a sextet member",
    )?;
    success!("membership tests passed");

    check(
        network.collaborators("Bill Evans")
            == [
                "Cannonball Adderley",
                "Jimmy Cobb",
                "John Coltrane",
                "Miles Davis",
                "Paul Chambers",
                "Wynton Kelly",
            ],
        "Bill Evans collaborated with the rest of the Kind of Blue band",
    )?;
    check(
        network
            .studios_of("Giant Steps")
            .first()
            .is_some_and(|studio| studio.name == "Atlantic Studios"),
        "Giant Steps was recorded at Atlantic",
    )?;
    check(
        network.appearances_of("Milestones").len() == 1,
        "Milestones appeared on one compilation",
    )?;
    success!("release tests passed");

    let link = network.connection("Bill Evans", "Atlantic Studios");
    check(
        link.as_ref().is_some_and(|path| path.len() == 5),
        "Bill Evans reaches Atlantic Studios in four hops",
    )?;
    check(
        network
            .graph()
            .find_path(&"Bill Evans".to_string(), &"Atlantic Studios".to_string())
            .is_none(),
        "no directed path from Bill Evans to Atlantic Studios",
    )?;
    success!("connection tests passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_passes() {
        for section in Section::EACH {
            assert_eq!(run(section), Ok(()), "section {section} failed");
        }
        assert_eq!(run(Section::All), Ok(()));
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("Trees".parse::<Section>(), Ok(Section::Tree));
        assert_eq!("music".parse::<Section>(), Ok(Section::Network));
        assert_eq!(Section::default(), Section::All);
        assert!("heaps".parse::<Section>().is_err());
    }

    #[test]
    fn test_check_reports_failure() {
        assert_eq!(check(true, "fine"), Ok(()));
        assert_eq!(
            check(false, "broken"),
            Err("check failed: broken".to_string())
        );
    }
}
