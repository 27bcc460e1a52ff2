use denscan::cluster::{cluster, region_query, Dbscan, Distance, Euclidean, Label};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::BTreeSet;

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        self.parent[ra] = rb;
    }
}

fn points() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 0..40)
}

proptest! {
    #[test]
    fn prop_deterministic_and_complete(
        data in points(),
        eps in 0.0f64..4.0,
        min_pts in 1usize..6
    ) {
        let first = cluster(&data, &Euclidean, eps, min_pts).unwrap();
        let second = cluster(&data, &Euclidean, eps, min_pts).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), data.len());
        for label in &first {
            prop_assert!(!label.is_undefined());
        }
    }

    #[test]
    fn prop_cluster_ids_contiguous(
        data in points(),
        eps in 0.0f64..4.0,
        min_pts in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_pts).fit(&data, &Euclidean).unwrap();

        let ids: BTreeSet<usize> = fit.labels().iter().filter_map(|l| l.cluster_id()).collect();
        let expected: BTreeSet<usize> = (1..=fit.n_clusters()).collect();
        prop_assert_eq!(ids, expected);

        let sizes = fit.cluster_sizes();
        prop_assert!(sizes.iter().all(|&s| s > 0));
        prop_assert_eq!(sizes.iter().sum::<usize>() + fit.noise_count(), data.len());
    }

    #[test]
    fn prop_core_and_noise_semantics(
        data in points(),
        eps in 0.0f64..4.0,
        min_pts in 1usize..6
    ) {
        let fit = Dbscan::new(eps, min_pts).fit(&data, &Euclidean).unwrap();
        let labels = fit.labels();

        for i in 0..data.len() {
            let neighbors = region_query(&data, &Euclidean, i, eps);
            prop_assert_eq!(fit.is_core(i), neighbors.len() >= min_pts);

            match labels[i] {
                Label::Noise => {
                    prop_assert!(neighbors.len() < min_pts);
                    // Not reachable from any core point.
                    for &j in &neighbors {
                        prop_assert!(!fit.is_core(j));
                    }
                }
                Label::Cluster(id) => {
                    // Core itself, or a border point of a core in the same cluster.
                    let anchored = neighbors
                        .iter()
                        .any(|&j| fit.is_core(j) && labels[j] == Label::Cluster(id));
                    prop_assert!(anchored);

                    if fit.is_core(i) {
                        for &j in &neighbors {
                            if fit.is_core(j) {
                                prop_assert_eq!(labels[j], Label::Cluster(id));
                            }
                        }
                    }
                }
                Label::Undefined => prop_assert!(false, "undefined label in output"),
            }
        }
    }

    #[test]
    fn prop_min_pts_one_matches_components(
        data in points(),
        eps in 0.0f64..4.0
    ) {
        let fit = Dbscan::new(eps, 1).fit(&data, &Euclidean).unwrap();
        prop_assert_eq!(fit.noise_count(), 0);

        let mut uf = UnionFind::new(data.len());
        for i in 0..data.len() {
            for j in (i + 1)..data.len() {
                if Euclidean.distance(&data[i], &data[j]) <= eps {
                    uf.union(i, j);
                }
            }
        }
        let components: BTreeSet<usize> = (0..data.len()).map(|i| uf.find(i)).collect();
        prop_assert_eq!(fit.n_clusters(), components.len());
    }

    #[test]
    fn prop_stepwise_matches_one_shot(
        data in points(),
        eps in 0.0f64..4.0,
        min_pts in 1usize..6,
        stop_after in 0usize..40
    ) {
        let dbscan = Dbscan::new(eps, min_pts);
        let expected = dbscan.fit(&data, &Euclidean).unwrap();

        let mut run = dbscan.run(&data, &Euclidean).unwrap();
        for _ in 0..stop_after {
            if run.step().is_none() {
                break;
            }
        }
        let fit = run.finish();
        prop_assert_eq!(fit, expected);
    }

    #[test]
    fn prop_one_region_query_per_point(
        data in points(),
        eps in 0.0f64..4.0,
        min_pts in 1usize..6
    ) {
        let calls = Cell::new(0usize);
        let counting = |a: &Vec<f64>, b: &Vec<f64>| {
            calls.set(calls.get() + 1);
            Euclidean.distance(a, b)
        };

        let fit = Dbscan::new(eps, min_pts).fit(&data, &counting).unwrap();
        prop_assert_eq!(fit.labels().len(), data.len());
        prop_assert_eq!(calls.get(), data.len() * data.len());
    }
}
