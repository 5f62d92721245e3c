use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::extractor::ResumeSubmission;
use crate::scoring::{CandidateId, ExtractedFactRecord, JobRequirements};

/// Identifies one extraction by candidate, posting content, and resume
/// content. Editing a posting invalidates the cached facts for everyone in
/// its pool; resubmitting a changed resume invalidates only that candidate's
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    candidate_id: CandidateId,
    job_digest: u64,
    resume_digest: u64,
}

impl CacheKey {
    pub fn for_submission(submission: &ResumeSubmission, job: &JobRequirements) -> Self {
        let mut job_hasher = DefaultHasher::new();
        job.hash(&mut job_hasher);
        let mut resume_hasher = DefaultHasher::new();
        submission.resume_text.hash(&mut resume_hasher);
        Self {
            candidate_id: submission.candidate_id.clone(),
            job_digest: job_hasher.finish(),
            resume_digest: resume_hasher.finish(),
        }
    }
}

struct CacheEntry {
    record: ExtractedFactRecord,
    stored_at: Instant,
}

struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    order: VecDeque<CacheKey>,
}

/// Bounded in-memory store for extraction results.
///
/// Capacity and TTL are fixed at construction and injected by the caller.
/// When full, the entry with the oldest insertion is dropped first; expired
/// entries are removed lazily when read. A capacity of zero disables storage
/// entirely.
pub struct ExtractionCache {
    capacity: usize,
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl ExtractionCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            capacity,
            ttl,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn get(&self, key: &CacheKey) -> Option<ExtractedFactRecord> {
        let mut state = self.state.lock().expect("cache mutex poisoned");
        let expired = match state.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                return Some(entry.record.clone());
            }
            Some(_) => true,
            None => false,
        };
        if expired {
            state.entries.remove(key);
            state.order.retain(|stored| stored != key);
        }
        None
    }

    pub fn insert(&self, key: CacheKey, record: ExtractedFactRecord) {
        if self.capacity == 0 {
            return;
        }
        let mut state = self.state.lock().expect("cache mutex poisoned");
        if state.entries.contains_key(&key) {
            if let Some(entry) = state.entries.get_mut(&key) {
                entry.record = record;
                entry.stored_at = Instant::now();
            }
            return;
        }
        while state.entries.len() >= self.capacity {
            match state.order.pop_front() {
                Some(oldest) => {
                    state.entries.remove(&oldest);
                }
                None => break,
            }
        }
        state.order.push_back(key.clone());
        state.entries.insert(
            key,
            CacheEntry {
                record,
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.state.lock().expect("cache mutex poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{
        BonusFactorFacts, CareerProgression, EducationFacts, EducationRelevance,
        EducationRequirement, EvidenceStrength, ExperienceFacts, IndustryMatch, JobType,
        LeadershipLevel, ProjectComplexity, QualityLevel, ResumeQualityFacts, RoleMatch,
        SoftSkillFacts, TechnicalSkillFacts,
    };

    fn record(years: f64) -> ExtractedFactRecord {
        ExtractedFactRecord {
            technical_skills: TechnicalSkillFacts {
                required_techs_found: Vec::new(),
                similar_techs: Vec::new(),
                years_of_experience: years,
                project_complexity: ProjectComplexity::Basic,
            },
            experience: ExperienceFacts {
                industry_match: IndustryMatch::Transferable,
                role_match: RoleMatch::Related,
                quantifiable_achievements: Vec::new(),
                career_progression: CareerProgression::LateralMoves,
            },
            education: EducationFacts {
                meets_requirement: EducationRequirement::Meets,
                relevance_to_role: EducationRelevance::General,
                certifications: Vec::new(),
            },
            soft_skills: SoftSkillFacts {
                communication_evidence: EvidenceStrength::Minimal,
                leadership_experience: LeadershipLevel::None,
                cultural_fit_indicators: Vec::new(),
                adaptability_evidence: EvidenceStrength::Minimal,
            },
            resume_quality: ResumeQualityFacts {
                clarity: QualityLevel::Average,
                completeness: QualityLevel::Average,
            },
            bonus_factors: BonusFactorFacts {
                transferable_skills: Vec::new(),
                preferred_qualifications_met: Vec::new(),
            },
        }
    }

    fn job(title: &str) -> JobRequirements {
        JobRequirements {
            title: title.to_string(),
            description: "desc".to_string(),
            must_have: Vec::new(),
            nice_to_have: Vec::new(),
            job_type: JobType::General,
        }
    }

    fn submission(id: &str, resume: &str) -> ResumeSubmission {
        ResumeSubmission {
            candidate_id: CandidateId::new(id),
            resume_text: resume.to_string(),
        }
    }

    #[test]
    fn stores_and_returns_records_per_key() {
        let cache = ExtractionCache::new(8, Duration::from_secs(60));
        let key = CacheKey::for_submission(&submission("c1", "resume body"), &job("Analyst"));

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), record(4.0));

        let hit = cache.get(&key).expect("cached record");
        assert_eq!(hit.technical_skills.years_of_experience, 4.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn same_candidate_different_jobs_use_distinct_keys() {
        let cache = ExtractionCache::new(8, Duration::from_secs(60));
        let candidate = submission("c1", "resume body");
        let first = CacheKey::for_submission(&candidate, &job("Analyst"));
        let second = CacheKey::for_submission(&candidate, &job("Engineer"));

        cache.insert(first.clone(), record(2.0));

        assert!(cache.get(&second).is_none());
        assert!(cache.get(&first).is_some());
    }

    #[test]
    fn same_candidate_changed_resume_uses_a_distinct_key() {
        let cache = ExtractionCache::new(8, Duration::from_secs(60));
        let first = CacheKey::for_submission(
            &submission("c1", "four years of helpdesk support"),
            &job("Analyst"),
        );
        let second = CacheKey::for_submission(
            &submission("c1", "nine years of database engineering"),
            &job("Analyst"),
        );

        cache.insert(first.clone(), record(4.0));

        assert!(cache.get(&second).is_none());
        let hit = cache.get(&first).expect("original resume still cached");
        assert_eq!(hit.technical_skills.years_of_experience, 4.0);
    }

    #[test]
    fn expired_entries_are_dropped_on_read() {
        let cache = ExtractionCache::new(8, Duration::ZERO);
        let key = CacheKey::for_submission(&submission("c1", "resume body"), &job("Analyst"));

        cache.insert(key.clone(), record(4.0));

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_the_oldest_insertion() {
        let cache = ExtractionCache::new(2, Duration::from_secs(60));
        let keys: Vec<CacheKey> = ["c1", "c2", "c3"]
            .into_iter()
            .map(|id| CacheKey::for_submission(&submission(id, "resume body"), &job("Analyst")))
            .collect();

        cache.insert(keys[0].clone(), record(1.0));
        cache.insert(keys[1].clone(), record(2.0));
        cache.insert(keys[2].clone(), record(3.0));

        assert!(cache.get(&keys[0]).is_none());
        assert!(cache.get(&keys[1]).is_some());
        assert!(cache.get(&keys[2]).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_disables_storage() {
        let cache = ExtractionCache::new(0, Duration::from_secs(60));
        let key = CacheKey::for_submission(&submission("c1", "resume body"), &job("Analyst"));

        cache.insert(key.clone(), record(4.0));

        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn reinsert_refreshes_the_stored_record() {
        let cache = ExtractionCache::new(4, Duration::from_secs(60));
        let key = CacheKey::for_submission(&submission("c1", "resume body"), &job("Analyst"));

        cache.insert(key.clone(), record(1.0));
        cache.insert(key.clone(), record(9.0));

        let hit = cache.get(&key).expect("cached record");
        assert_eq!(hit.technical_skills.years_of_experience, 9.0);
        assert_eq!(cache.len(), 1);
    }
}
