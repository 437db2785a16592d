//! Adaptive partitioning of a corpus index.

use rustc_hash::FxHashSet;

use super::config::PartitionConfig;
use super::features::{project, FeatureVector};
use super::kmeans::{self, KMeansParams, Point};
use crate::index::{CorpusIndex, IndexEntry};

/// A corpus index split into clusters on the feature plane.
///
/// Built once per corpus and read-only afterwards. Keeps the fitted
/// centroids so queries can be routed to a single partition.
#[derive(Debug, Clone)]
pub struct Partitioning {
    entries: Vec<IndexEntry>,
    features: Vec<FeatureVector>,
    assignments: Vec<usize>,
    centroids: Vec<Point>,
    members: Vec<Vec<usize>>,
    degraded: bool,
}

impl Partitioning {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            features: Vec::new(),
            assignments: Vec::new(),
            centroids: Vec::new(),
            members: Vec::new(),
            degraded: false,
        }
    }

    /// Number of partitions.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.centroids.len()
    }

    /// Number of indexed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were partitioned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no group count satisfied the minimum group size and the
    /// result at the lowest group count was kept anyway.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Entries in corpus order.
    #[inline]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Cached feature of each entry, parallel to [`entries`](Self::entries).
    #[inline]
    pub fn features(&self) -> &[FeatureVector] {
        &self.features
    }

    /// Partition id of each entry, parallel to [`entries`](Self::entries).
    #[inline]
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Fitted centre of each partition.
    #[inline]
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    /// Entry indices belonging to partition `id`, in corpus order.
    ///
    /// Unknown ids yield an empty slice.
    pub fn members(&self, id: usize) -> &[usize] {
        self.members.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Population of each partition.
    pub fn populations(&self) -> Vec<usize> {
        self.members.iter().map(Vec::len).collect()
    }

    /// Partition whose centroid is nearest to `feature`.
    ///
    /// Uses the same squared Euclidean metric as clustering; ties go to the
    /// lowest partition id. `None` only when there are no partitions.
    pub fn classify(&self, feature: &FeatureVector) -> Option<usize> {
        kmeans::nearest_centroid(&self.centroids, &feature.as_point())
    }
}

/// Clusters a corpus index, shrinking the group count until every group is
/// populated enough.
///
/// Starting at `initial_groups`, each attempt re-clusters from scratch. The
/// first attempt in which every group holds at least `min_group_size`
/// entries is accepted. If none qualifies, the attempt at `min_groups` is
/// accepted and the result is marked degraded.
///
/// The group count of an attempt never exceeds the number of distinct
/// features in the corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptivePartitioner {
    config: PartitionConfig,
}

impl AdaptivePartitioner {
    /// Create a partitioner.
    pub fn new(config: PartitionConfig) -> Self {
        Self { config }
    }

    /// The partitioner's settings.
    #[inline]
    pub fn config(&self) -> &PartitionConfig {
        &self.config
    }

    /// Partition an index.
    pub fn partition(&self, index: CorpusIndex) -> Partitioning {
        let entries = index.into_entries();
        if entries.is_empty() {
            tracing::debug!("empty corpus, no partitions built");
            return Partitioning::empty();
        }

        let features: Vec<FeatureVector> = entries.iter().map(project).collect();
        let points: Vec<Point> = features.iter().map(FeatureVector::as_point).collect();
        let distinct = features.iter().collect::<FxHashSet<_>>().len();

        let mut groups = self.config.initial_groups().min(distinct);
        let floor = self.config.min_groups().min(groups);
        let min_size = self.config.min_group_size();

        let (fit, degraded) = loop {
            let fit = kmeans::fit(
                &points,
                &KMeansParams {
                    k: groups,
                    max_iterations: self.config.max_iterations(),
                    restarts: self.config.restarts(),
                    seed: self.config.seed(),
                },
            );
            let populations = fit.populations();
            tracing::debug!(groups, ?populations, inertia = fit.inertia, "clustering attempt");

            if populations.iter().all(|&p| p >= min_size) {
                tracing::info!(groups, entries = entries.len(), "accepted partitioning");
                break (fit, false);
            }
            if groups <= floor {
                tracing::warn!(
                    groups,
                    min_group_size = min_size,
                    ?populations,
                    "no group count satisfies the minimum group size; keeping undersized groups"
                );
                break (fit, true);
            }
            groups -= 1;
        };

        let mut members = vec![Vec::new(); fit.centroids.len()];
        for (i, &cluster) in fit.assignments.iter().enumerate() {
            members[cluster].push(i);
        }

        Partitioning {
            entries,
            features,
            assignments: fit.assignments,
            centroids: fit.centroids,
            members,
            degraded,
        }
    }
}

/// Partition an index with the given settings.
pub fn partition(index: CorpusIndex, config: &PartitionConfig) -> Partitioning {
    AdaptivePartitioner::new(*config).partition(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::PhoneticCode;

    fn entry(code: &str, word: &str) -> IndexEntry {
        IndexEntry {
            code: PhoneticCode::parse(code).unwrap(),
            word: word.to_string(),
        }
    }

    /// `count` entries sharing one code.
    fn cluster(code: &str, prefix: &str, count: usize) -> Vec<IndexEntry> {
        (0..count)
            .map(|i| entry(code, &format!("{}{}", prefix, i)))
            .collect()
    }

    #[test]
    fn test_empty_index() {
        let p = partition(CorpusIndex::default(), &PartitionConfig::default());
        assert!(p.is_empty());
        assert_eq!(p.group_count(), 0);
        assert!(!p.is_degraded());
        assert_eq!(p.classify(&FeatureVector::from_code(&PhoneticCode::parse("A000").unwrap())), None);
        assert!(p.members(0).is_empty());
    }

    #[test]
    fn test_group_count_capped_by_distinct_features() {
        let mut entries = cluster("A100", "a", 6);
        entries.extend(cluster("Z600", "z", 6));
        let p = partition(entries.into(), &PartitionConfig::default());

        assert_eq!(p.group_count(), 2);
        assert_eq!(p.populations(), vec![6, 6]);
        assert!(!p.is_degraded());
    }

    #[test]
    fn test_degrades_at_min_groups() {
        let entries = vec![
            entry("A100", "a"),
            entry("M300", "m"),
            entry("Z600", "z"),
        ];
        let p = partition(entries.into(), &PartitionConfig::default());

        assert!(p.is_degraded());
        assert_eq!(p.group_count(), 2);
        assert_eq!(p.populations().iter().sum::<usize>(), 3);
    }

    #[test]
    fn test_single_distinct_feature() {
        let p = partition(cluster("L350", "l", 3).into(), &PartitionConfig::default());
        assert_eq!(p.group_count(), 1);
        assert!(p.is_degraded());
        assert_eq!(p.members(0), &[0, 1, 2]);
    }

    #[test]
    fn test_members_are_in_corpus_order() {
        let mut entries = Vec::new();
        for i in 0..10 {
            entries.push(entry("B200", &format!("b{}", i)));
            entries.push(entry("W600", &format!("w{}", i)));
        }
        let p = partition(entries.into(), &PartitionConfig::default());
        for id in 0..p.group_count() {
            let members = p.members(id);
            assert!(members.windows(2).all(|w| w[0] < w[1]));
            for &m in members {
                assert_eq!(p.assignments()[m], id);
            }
        }
    }

    #[test]
    fn test_classify_routes_to_own_cluster() {
        let mut entries = cluster("A100", "a", 6);
        entries.extend(cluster("Z600", "z", 6));
        let p = partition(entries.into(), &PartitionConfig::default());

        let a = p.classify(&p.features()[0]).unwrap();
        let z = p.classify(&p.features()[6]).unwrap();
        assert_ne!(a, z);
        assert_eq!(p.members(a).len(), 6);
        assert!(p.members(a).iter().all(|&i| p.entries()[i].word.starts_with('a')));
    }

    #[test]
    fn test_repeatable() {
        let entries: Vec<IndexEntry> = (0..60)
            .map(|i| {
                let letter = (b'A' + (i * 7 % 26) as u8) as char;
                let code = format!("{}{:03}", letter, i * 11 % 667);
                entry(&code, &format!("w{}", i))
            })
            .collect();
        let config = PartitionConfig::default();
        let a = partition(entries.clone().into(), &config);
        let b = partition(entries.into(), &config);
        assert_eq!(a.assignments(), b.assignments());
        assert_eq!(a.centroids(), b.centroids());
        assert_eq!(a.is_degraded(), b.is_degraded());
    }
}
