use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::scheduler::Scheduler;
use crate::surface::{Particle, ParticleContainer, ParticleId};
use crate::symbols::{RandomSymbolSource, SymbolAlphabet};

/// Spawns bursts of falling emoji. Every particle removes itself when its
/// own lifetime runs out; nothing else tracks it.
pub struct ParticleRain {
    container: Rc<dyn ParticleContainer>,
    scheduler: Rc<dyn Scheduler>,
    source: RefCell<RandomSymbolSource>,
    lifetime: (Duration, Duration),
    next_id: Cell<u64>,
}

impl ParticleRain {
    pub fn new(
        container: Rc<dyn ParticleContainer>,
        scheduler: Rc<dyn Scheduler>,
        source: RandomSymbolSource,
        lifetime: (Duration, Duration),
    ) -> Self {
        Self {
            container,
            scheduler,
            source: RefCell::new(source),
            lifetime,
            next_id: Cell::new(0),
        }
    }

    pub fn spawn(&self, count: usize, alphabet: &SymbolAlphabet) -> Vec<Particle> {
        let (min, max) = self.lifetime;
        let mut spawned = Vec::with_capacity(count);
        let mut source = self.source.borrow_mut();

        for _ in 0..count {
            let Some(symbol) = source.draw(alphabet) else {
                log::warn!("Rain alphabet is empty; no particles spawned");
                break;
            };
            let id = ParticleId(self.next_id.get());
            self.next_id.set(id.0 + 1);

            let particle = Particle {
                id,
                symbol: symbol.to_string(),
                left_vw: source.uniform(0.0..100.0),
                lifetime_secs: source.uniform(min.as_secs_f64()..max.as_secs_f64()),
            };
            self.container.insert_particle(particle.clone());

            let container = self.container.clone();
            self.scheduler.schedule_once(
                Duration::from_secs_f64(particle.lifetime_secs),
                Box::new(move || container.remove_particle(id)),
            );
            spawned.push(particle);
        }

        log::debug!("Spawned {} rain particles", spawned.len());
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::surface::MemorySurface;

    fn rain(surface: &Rc<MemorySurface>, scheduler: &Rc<ManualScheduler>) -> ParticleRain {
        ParticleRain::new(
            surface.clone(),
            scheduler.clone(),
            RandomSymbolSource::seeded(11),
            (Duration::from_secs(3), Duration::from_secs(6)),
        )
    }

    #[test]
    fn test_spawn_places_particles_in_bounds() {
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        let alphabet = SymbolAlphabet::from(["💰", "💵", "💸"]);

        let particles = rain(&surface, &scheduler).spawn(60, &alphabet);

        assert_eq!(particles.len(), 60);
        assert_eq!(surface.particle_count(), 60);
        for p in &particles {
            assert!(alphabet.contains(&p.symbol));
            assert!((0.0..100.0).contains(&p.left_vw));
            assert!((3.0..6.0).contains(&p.lifetime_secs));
        }
    }

    #[test]
    fn test_each_particle_retires_at_its_lifetime() {
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        let particles = rain(&surface, &scheduler).spawn(20, &SymbolAlphabet::from(["💰"]));

        scheduler.advance_ms(2999);
        assert_eq!(surface.particle_count(), 20);

        let mut lifetimes: Vec<Duration> = particles
            .iter()
            .map(|p| Duration::from_secs_f64(p.lifetime_secs))
            .collect();
        lifetimes.sort();
        let first = lifetimes[0];
        scheduler.advance(first - scheduler.now());
        assert_eq!(surface.particle_count(), 20 - lifetimes.iter().filter(|l| **l <= first).count());

        scheduler.advance_ms(3001);
        assert_eq!(surface.particle_count(), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_removal_after_external_clear_is_noop() {
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        rain(&surface, &scheduler).spawn(5, &SymbolAlphabet::from(["💵"]));

        surface.clear_particles();
        scheduler.advance_ms(6000);
        assert_eq!(surface.particle_count(), 0);
    }

    #[test]
    fn test_ids_are_unique_across_bursts() {
        let surface = Rc::new(MemorySurface::new(3));
        let scheduler = Rc::new(ManualScheduler::new());
        let rain = rain(&surface, &scheduler);
        let alphabet = SymbolAlphabet::from(["💸"]);
        let mut ids: Vec<ParticleId> = rain.spawn(10, &alphabet).into_iter().map(|p| p.id).collect();
        ids.extend(rain.spawn(10, &alphabet).into_iter().map(|p| p.id));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
